//! Options for the streaming transformer.

/// Default number of data rows between periodic output flushes.
pub const DEFAULT_FLUSH_EVERY: u64 = 100_000;

/// Default capacity of the reader and writer buffers (4 MiB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 4 << 20;

/// Options controlling a single transform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Number of data rows between periodic flushes.
    /// Defaults to 100000. Zero disables periodic flushing; the final flush
    /// still happens.
    pub flush_every: u64,

    /// Capacity in bytes of the CSV reader and writer buffers.
    /// Defaults to 4 MiB.
    pub buffer_capacity: usize,

    /// Log-transform the `true_duration_seconds` column when present.
    /// Defaults to false, which copies the column verbatim.
    pub duration_log1p: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            flush_every: DEFAULT_FLUSH_EVERY,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            duration_log1p: false,
        }
    }
}

impl TransformOptions {
    /// Set the periodic flush interval.
    #[must_use]
    pub fn with_flush_every(mut self, rows: u64) -> Self {
        self.flush_every = rows;
        self
    }

    /// Set the reader and writer buffer capacity.
    #[must_use]
    pub fn with_buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }

    /// Enable or disable the duration transform.
    #[must_use]
    pub fn with_duration_log1p(mut self, enabled: bool) -> Self {
        self.duration_log1p = enabled;
        self
    }

    /// Returns true when a periodic flush is due after `row` data rows.
    pub(crate) fn flush_due(&self, row: u64) -> bool {
        self.flush_every > 0 && row % self.flush_every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TransformOptions::default();
        assert_eq!(options.flush_every, 100_000);
        assert_eq!(options.buffer_capacity, 4 * 1024 * 1024);
        assert!(!options.duration_log1p);
    }

    #[test]
    fn test_builders() {
        let options = TransformOptions::default()
            .with_flush_every(10)
            .with_buffer_capacity(64)
            .with_duration_log1p(true);
        assert_eq!(options.flush_every, 10);
        assert_eq!(options.buffer_capacity, 64);
        assert!(options.duration_log1p);
    }

    #[test]
    fn test_flush_due() {
        let options = TransformOptions::default().with_flush_every(3);
        assert!(!options.flush_due(1));
        assert!(!options.flush_due(2));
        assert!(options.flush_due(3));
        assert!(options.flush_due(6));

        let never = TransformOptions::default().with_flush_every(0);
        assert!(!never.flush_due(0));
        assert!(!never.flush_due(100_000));
    }
}
