//! Log transform for the auxiliary `true_duration_seconds` column.
//!
//! Durations are right-skewed, so they are compressed with `ln(1 + x)`.
//! Negative durations are clamped to zero instead of producing NaN.

/// Header name of the auxiliary duration column.
pub const DURATION_COLUMN: &str = "true_duration_seconds";

/// `ln(1 + x)` with negative inputs clamped to 0.
pub fn log1p_clamped(x: f64) -> f64 {
    if x < 0.0 { 0.0 } else { x.ln_1p() }
}

/// Parse a raw duration and return its log-transformed value, formatted
/// with six decimals.
///
/// Returns the raw value back as the error when it is not a number.
pub fn log1p_duration(value: &str) -> Result<String, &str> {
    let parsed: f64 = value.trim().parse().map_err(|_| value)?;
    if parsed.is_nan() {
        return Err(value);
    }
    Ok(format!("{:.6}", log1p_clamped(parsed)))
}
