//! Header inspection: locating the label and duration columns.

use csv::StringRecord;
use tracing::warn;

use crate::error::{Result, TransformError};
use crate::normalization::DURATION_COLUMN;

/// Header name of the required label column.
pub const LABEL_COLUMN: &str = "label";

/// Positions of the columns the transformer touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelColumns {
    /// Index of the label column.
    pub label: usize,
    /// Index of the `true_duration_seconds` column, if present.
    pub duration: Option<usize>,
}

/// Returns true if a header field names `column` (trimmed, ASCII case-insensitive).
pub fn header_matches(field: &str, column: &str) -> bool {
    field.trim().eq_ignore_ascii_case(column)
}

/// Locate the label column (required) and the duration column (optional).
///
/// When several fields match `label` the last one wins.
///
/// # Errors
///
/// Returns [`TransformError::MissingColumn`] if no field matches `label`.
pub fn locate_columns(header: &StringRecord) -> Result<LabelColumns> {
    let mut label = None;
    let mut duration = None;

    for (idx, field) in header.iter().enumerate() {
        if header_matches(field, LABEL_COLUMN) {
            if let Some(previous) = label {
                warn!(previous, index = idx, "multiple label columns; using the last");
            }
            label = Some(idx);
        } else if header_matches(field, DURATION_COLUMN) {
            duration = Some(idx);
        }
    }

    let label = label.ok_or_else(|| TransformError::MissingColumn {
        column: LABEL_COLUMN.to_string(),
    })?;
    Ok(LabelColumns { label, duration })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_locate_label() {
        let columns = locate_columns(&header(&["id", "label", "data"])).unwrap();
        assert_eq!(columns.label, 1);
        assert_eq!(columns.duration, None);
    }

    #[test]
    fn test_locate_label_case_and_whitespace() {
        for name in ["LABEL", " label ", "Label", "\tlabel"] {
            let columns = locate_columns(&header(&["id", name])).unwrap();
            assert_eq!(columns.label, 1, "header {name:?}");
        }
    }

    #[test]
    fn test_locate_duration() {
        let columns =
            locate_columns(&header(&["True_Duration_Seconds", "x", "label"])).unwrap();
        assert_eq!(columns.label, 2);
        assert_eq!(columns.duration, Some(0));
    }

    #[test]
    fn test_missing_label() {
        let result = locate_columns(&header(&["foo", "labell", "bar"]));
        assert!(matches!(
            result,
            Err(TransformError::MissingColumn { ref column }) if column == "label"
        ));
    }

    #[test]
    fn test_last_label_wins() {
        let columns = locate_columns(&header(&["label", "id", "LABEL"])).unwrap();
        assert_eq!(columns.label, 2);
    }

    #[test]
    fn test_header_matches() {
        assert!(header_matches(" Label\n", "label"));
        assert!(!header_matches("labels", "label"));
        assert!(!header_matches("", "label"));
    }
}
