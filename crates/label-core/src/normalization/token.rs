//! Label token normalization.
//!
//! Maps the synonyms of a binary label to the canonical `"1"` / `"0"`.
//! Matching trims surrounding whitespace and folds ASCII case only, so
//! non-ASCII look-alikes and invisible characters never match.

use crate::error::InvalidLabelToken;

/// Canonical value for truthy tokens.
pub const CANONICAL_TRUE: &str = "1";

/// Canonical value for falsy tokens.
pub const CANONICAL_FALSE: &str = "0";

/// Normalized token to canonical value.
static LABEL_VOCABULARY: [(&str, &str); 8] = [
    ("true", CANONICAL_TRUE),
    ("positive", CANONICAL_TRUE),
    ("yes", CANONICAL_TRUE),
    ("1", CANONICAL_TRUE),
    ("false", CANONICAL_FALSE),
    ("negative", CANONICAL_FALSE),
    ("no", CANONICAL_FALSE),
    ("0", CANONICAL_FALSE),
];

/// Normalize a raw label token to `"1"` or `"0"`.
///
/// The token is trimmed and compared case-insensitively (ASCII only) against
/// the fixed vocabulary `{true, positive, yes, 1}` / `{false, negative, no, 0}`.
///
/// # Errors
///
/// Returns [`InvalidLabelToken`] carrying the untouched raw value when the
/// token is not in the vocabulary.
pub fn normalize_label(value: &str) -> Result<&'static str, InvalidLabelToken> {
    let trimmed = value.trim();
    LABEL_VOCABULARY
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(trimmed))
        .map(|&(_, canonical)| canonical)
        .ok_or_else(|| InvalidLabelToken::new(value))
}

/// Check if a raw token is already in canonical form.
pub fn is_canonical(value: &str) -> bool {
    value == CANONICAL_TRUE || value == CANONICAL_FALSE
}

/// All accepted tokens in normalized (trimmed, lowercase) form.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    LABEL_VOCABULARY.iter().map(|&(token, _)| token)
}
