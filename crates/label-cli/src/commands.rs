//! Command execution for the label normalizer.

use std::fs;
use std::path::Path;

use anyhow::{Result, ensure};
use label_core::{TransformOptions, TransformSummary, transform_label_csv_with_options};
use tracing::info;

/// Run one label transformation from `input` to `output`.
///
/// Refuses to run when both paths resolve to the same file (including a
/// hard link or symlink to it): creating the output would truncate the
/// input before it is read.
pub fn run_transform(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<TransformSummary> {
    ensure!(
        !same_file(input, output),
        "input and output refer to the same file: {}",
        input.display()
    );

    info!(
        flush_every = options.flush_every,
        buffer_capacity = options.buffer_capacity,
        duration_log1p = options.duration_log1p,
        "starting label transformation"
    );
    let summary = transform_label_csv_with_options(input, output, options)?;
    Ok(summary)
}

/// Message printed to stdout after a successful run.
pub fn success_message(summary: &TransformSummary, output: &Path) -> String {
    format!(
        "Label transformation succeeded: {} rows -> {}",
        summary.rows,
        output.display()
    )
}

/// Whether both paths name the same existing file, hard links included.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
