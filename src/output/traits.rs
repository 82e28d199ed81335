//! Output sink traits and types
//!
//! This module defines the trait interface for record sinks and the errors
//! they report.

use super::record::OutputRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize records: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for a run's records
///
/// Records are handed over once, at the end of the run.
pub trait RecordSink {
    /// Writes every record of the run
    ///
    /// # Arguments
    ///
    /// * `records` - All records, in production order
    fn write_records(&self, records: &[OutputRecord]) -> OutputResult<()>;

    /// Human-readable location of the sink, for logging
    fn describe(&self) -> String;
}
