//! Output module for run results
//!
//! This module handles:
//! - The flat, uniform-schema output record
//! - Writing records to their sink once the run is over
//! - Run statistics

mod json;
mod record;
pub mod stats;
mod traits;

pub use json::{format_records, JsonFileSink};
pub use record::OutputRecord;
pub use stats::{log_summary, HarvestSummary};
pub use traits::{OutputError, OutputResult, RecordSink};
