//! Integration test for the JSON logging layer.
//!
//! Installs the global subscriber, so this file holds a single test.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use label_cli::commands::run_transform;
use label_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use label_core::TransformOptions;
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }
}

struct CapturedGuard {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedGuard {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedGuard;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedGuard {
            buf: Arc::clone(&self.buf),
        }
    }
}

#[test]
fn json_logs_carry_target_and_row_counts() {
    let logs = CapturedLogs::default();
    let mut config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_target(true);
    config.use_env_filter = false;
    init_logging_with_writer(&config, logs.clone());

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "id,label\n1,yes\n2,no\n").unwrap();
    run_transform(&input, &output, &TransformOptions::default()).expect("run");

    let captured = logs.contents();
    assert!(!captured.is_empty());
    for line in captured.lines() {
        assert!(line.starts_with('{') && line.ends_with('}'), "{line}");
    }
    assert!(captured.contains(r#""message":"starting label transformation""#));
    assert!(captured.contains(r#""target":"label_cli::commands""#));
    assert!(captured.contains(r#""message":"label transformation complete""#));
    assert!(captured.contains(r#""target":"label_core::transform""#));
    assert!(captured.contains(r#""rows":2"#));
    // Debug events are filtered at info.
    assert!(!captured.contains(r#""level":"DEBUG""#));
}
