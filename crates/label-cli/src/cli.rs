//! CLI argument definitions for the label normalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use label_core::{DEFAULT_BUFFER_CAPACITY, DEFAULT_FLUSH_EVERY, TransformOptions};

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "ALL_DATASET_UNCLEAN_11_08.csv";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "label_transformed_output.csv";

#[derive(Parser)]
#[command(
    name = "label-normalize",
    version,
    about = "Normalize the label column of a CSV file to 1/0",
    long_about = "Stream a CSV file and rewrite its `label` column so that\n\
                  true/positive/yes/1 become 1 and false/negative/no/0 become 0.\n\n\
                  All other columns are copied verbatim. The first invalid row\n\
                  aborts the run with a non-zero exit status."
)]
pub struct Cli {
    /// CSV file to read.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// CSV file to write (truncated if it exists).
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Flush the output every N rows (0 flushes only at the end).
    #[arg(long = "flush-every", value_name = "ROWS", default_value_t = DEFAULT_FLUSH_EVERY)]
    pub flush_every: u64,

    /// Reader and writer buffer size in bytes.
    #[arg(long = "buffer-size", value_name = "BYTES", default_value_t = DEFAULT_BUFFER_CAPACITY)]
    pub buffer_size: usize,

    /// Replace `true_duration_seconds` with ln(1 + max(x, 0)).
    #[arg(long = "log1p-duration")]
    pub log1p_duration: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

impl Cli {
    /// Transform options derived from the flags.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::default()
            .with_flush_every(self.flush_every)
            .with_buffer_capacity(self.buffer_size)
            .with_duration_log1p(self.log1p_duration)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
