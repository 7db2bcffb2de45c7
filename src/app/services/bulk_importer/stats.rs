//! Import statistics for bulk postcode loads

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Counters collected over one import run
#[derive(Debug, Clone, Serialize)]
pub struct ImportStats {
    /// Source the records were read from
    pub source: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Total lines read, header and blank lines included
    pub lines_read: usize,

    /// Lines skipped as header
    pub header_lines_skipped: usize,

    /// Whitespace-only lines skipped
    pub blank_lines_skipped: usize,

    /// Lines successfully parsed into records
    pub records_parsed: usize,

    /// Chunks committed to the store
    pub chunks_committed: usize,

    /// Records persisted across all committed chunks
    pub records_written: usize,

    /// Wall-clock duration of the run
    #[serde(serialize_with = "serialize_duration_secs")]
    pub elapsed: Duration,
}

impl ImportStats {
    /// Create empty statistics for a source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            started_at: Utc::now(),
            lines_read: 0,
            header_lines_skipped: 0,
            blank_lines_skipped: 0,
            records_parsed: 0,
            chunks_committed: 0,
            records_written: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Records written per second of elapsed time
    pub fn records_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records_written as f64 / secs
        } else {
            0.0
        }
    }

    /// Whether the run stored nothing
    pub fn is_empty(&self) -> bool {
        self.records_written == 0
    }
}

fn serialize_duration_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
