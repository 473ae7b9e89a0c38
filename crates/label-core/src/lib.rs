//! Streaming binary label normalization for CSV files.
//!
//! This crate rewrites the `label` column of a CSV file so that synonymous
//! truthy/falsy tokens become the canonical `"1"` / `"0"`. Files are streamed
//! record by record with bounded memory, so input size is not limited by RAM.
//!
//! # Features
//!
//! - **Token normalization**: `true`/`positive`/`yes`/`1` → `"1"`,
//!   `false`/`negative`/`no`/`0` → `"0"` (trimmed, ASCII case-insensitive)
//! - **Column discovery**: locate `label` by trimmed, case-insensitive name
//! - **Streaming I/O**: one record in flight, periodic flushing
//! - **Duration transform**: optional `log1p` of `true_duration_seconds`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use label_core::{TransformOptions, transform_label_csv_with_options};
//!
//! let options = TransformOptions::default().with_flush_every(50_000);
//! let summary = transform_label_csv_with_options(
//!     Path::new("input.csv"),
//!     Path::new("output.csv"),
//!     &options,
//! )?;
//! println!("{} rows", summary.rows);
//! ```

mod error;
mod header;
mod options;
mod transform;

pub mod normalization;

// === Error Types ===
pub use error::{InvalidLabelToken, Result, TransformError};

// === Header Inspection ===
pub use header::{LABEL_COLUMN, LabelColumns, header_matches, locate_columns};

// === Options ===
pub use options::{DEFAULT_BUFFER_CAPACITY, DEFAULT_FLUSH_EVERY, TransformOptions};

// === Transformation ===
pub use transform::{
    TransformSummary, transform_label_csv, transform_label_csv_with_options, transform_reader,
};

// === Normalization ===
pub use normalization::{log1p_duration, normalize_label};
