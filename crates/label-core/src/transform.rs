//! Streaming label transformer.
//!
//! Reads a CSV file one record at a time, rewrites the label column with its
//! canonical value and writes every record to the output. Memory use is one
//! reused record plus the reader and writer buffers, regardless of file size.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::Instant;

use csv::{Reader, ReaderBuilder, StringRecord, Writer, WriterBuilder};
use tracing::{debug, info, info_span};

use crate::error::{Result, TransformError};
use crate::header::{LabelColumns, locate_columns};
use crate::normalization::{DURATION_COLUMN, log1p_duration, normalize_label};
use crate::options::TransformOptions;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Outcome of a successful transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    /// Number of data rows written (header excluded).
    pub rows: u64,
    /// Number of flushes performed, the final one included.
    pub flushes: u64,
    /// Columns located in the header.
    pub columns: LabelColumns,
}

/// Transform `input` into `output` with default options.
///
/// See [`transform_label_csv_with_options`].
pub fn transform_label_csv(input: &Path, output: &Path) -> Result<TransformSummary> {
    transform_label_csv_with_options(input, output, &TransformOptions::default())
}

/// Stream `input` into `output`, rewriting the label column to `"1"` / `"0"`.
///
/// The output is created (or truncated) before the header is read. On error
/// a partially written output may remain; rows written before the failing
/// row are flushed.
///
/// # Errors
///
/// Returns the first error encountered. Nothing after the failing row is
/// read or written.
pub fn transform_label_csv_with_options(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<TransformSummary> {
    let span = info_span!(
        "transform",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let started = Instant::now();

    let source = File::open(input).map_err(|source| TransformError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let sink = File::create(output).map_err(|source| TransformError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = transform_reader(source, sink, options)?;
    info!(
        rows = summary.rows,
        flushes = summary.flushes,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "label transformation complete"
    );
    Ok(summary)
}

/// Stream CSV from any reader into any writer.
///
/// This is the file-agnostic core of [`transform_label_csv_with_options`].
/// Both ends are owned and dropped before returning. A leading UTF-8 BOM is
/// carried over to the output.
pub fn transform_reader<R: Read, W: Write>(
    source: R,
    mut sink: W,
    options: &TransformOptions,
) -> Result<TransformSummary> {
    // The csv reader strips the BOM from the header, so look for it first.
    let mut source = BufReader::with_capacity(64, source);
    let has_bom = source
        .fill_buf()
        .map_err(|err| TransformError::MissingHeader {
            source: Some(err.into()),
        })?
        .starts_with(UTF8_BOM);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .buffer_capacity(options.buffer_capacity)
        .from_reader(source);
    let header = read_header(&mut reader)?;
    let columns = locate_columns(&header)?;
    debug!(
        label_index = columns.label,
        duration_index = ?columns.duration,
        duration_log1p = options.duration_log1p,
        "located columns"
    );
    if columns.duration.is_some() && !options.duration_log1p {
        debug!(column = DURATION_COLUMN, "duration column present; copying verbatim");
    }

    if has_bom {
        sink.write_all(UTF8_BOM)
            .map_err(|err| TransformError::WriteHeader { source: err.into() })?;
    }
    let mut writer = WriterBuilder::new()
        .buffer_capacity(options.buffer_capacity)
        .from_writer(sink);
    writer
        .write_record(&header)
        .map_err(|source| TransformError::WriteHeader { source })?;

    let mut rewriter = RowRewriter::new(columns, options);
    let streamed = rewriter.stream(&mut reader, &mut writer);

    // Flush whatever was written, even on error. The streaming error wins.
    let flushed = writer
        .flush()
        .map_err(|source| TransformError::Flush { source });
    streamed?;
    flushed?;
    rewriter.flushes += 1;

    Ok(TransformSummary {
        rows: rewriter.rows,
        flushes: rewriter.flushes,
        columns,
    })
}

fn read_header<R: Read>(reader: &mut Reader<R>) -> Result<StringRecord> {
    let header = reader
        .headers()
        .map_err(|source| TransformError::MissingHeader {
            source: Some(source),
        })?
        .clone();
    if header.is_empty() {
        return Err(TransformError::MissingHeader { source: None });
    }
    Ok(header)
}

/// Per-call row state: counters plus the located columns.
struct RowRewriter<'a> {
    columns: LabelColumns,
    options: &'a TransformOptions,
    rows: u64,
    flushes: u64,
}

impl<'a> RowRewriter<'a> {
    fn new(columns: LabelColumns, options: &'a TransformOptions) -> Self {
        Self {
            columns,
            options,
            rows: 0,
            flushes: 0,
        }
    }

    fn stream<R: Read, W: Write>(
        &mut self,
        reader: &mut Reader<R>,
        writer: &mut Writer<W>,
    ) -> Result<()> {
        let mut record = StringRecord::new();
        loop {
            let row = self.rows + 1;
            let more = reader
                .read_record(&mut record)
                .map_err(|source| TransformError::RowRead { row, source })?;
            if !more {
                return Ok(());
            }

            self.write_row(&record, row, writer)?;
            self.rows = row;

            if self.options.flush_due(row) {
                writer
                    .flush()
                    .map_err(|source| TransformError::Flush { source })?;
                self.flushes += 1;
                debug!(row, "flushed output");
            }
        }
    }

    fn write_row<W: Write>(
        &self,
        record: &StringRecord,
        row: u64,
        writer: &mut Writer<W>,
    ) -> Result<()> {
        let raw_label = record.get(self.columns.label).unwrap_or_default();
        let label = normalize_label(raw_label)
            .map_err(|source| TransformError::RowTransform { row, source })?;

        let duration = match self.columns.duration {
            Some(idx) if self.options.duration_log1p => {
                let raw = record.get(idx).unwrap_or_default();
                let value = log1p_duration(raw).map_err(|value| {
                    TransformError::InvalidDuration {
                        row,
                        value: value.to_string(),
                    }
                })?;
                Some((idx, value))
            }
            _ => None,
        };

        let label_idx = self.columns.label;
        let fields = record
            .iter()
            .enumerate()
            .map(|(idx, field)| match &duration {
                _ if idx == label_idx => label,
                Some((duration_idx, value)) if *duration_idx == idx => value.as_str(),
                _ => field,
            });
        writer
            .write_record(fields)
            .map_err(|source| TransformError::WriteRow { row, source })
    }
}
