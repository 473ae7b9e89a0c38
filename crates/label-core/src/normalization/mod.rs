//! Normalization functions applied to individual fields.
//!
//! - **token**: binary label normalization (`"1"` / `"0"`)
//! - **duration**: `log1p` transform for the auxiliary duration column

pub mod duration;
pub mod token;

// Re-export commonly used items
pub use duration::{DURATION_COLUMN, log1p_clamped, log1p_duration};
pub use token::{CANONICAL_FALSE, CANONICAL_TRUE, is_canonical, normalize_label, vocabulary};
