//! Run statistics
//!
//! Counters kept by the harvester while it works through the input list,
//! reported once the run is over.

/// Per-run counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Input URLs seen
    pub urls_total: usize,

    /// URLs that produced at least one record
    pub urls_processed: usize,

    /// URLs that did not resolve to a channel or video
    pub urls_skipped: usize,

    /// URLs whose processing failed or produced nothing
    pub urls_failed: usize,

    /// Videos that produced records
    pub videos: usize,

    /// Records produced
    pub records: usize,
}

impl HarvestSummary {
    /// Creates a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the share of input URLs that produced records, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.urls_total == 0 {
            return 0.0;
        }
        (self.urls_processed as f64 / self.urls_total as f64) * 100.0
    }
}

/// Logs a run summary
pub fn log_summary(summary: &HarvestSummary) {
    tracing::info!(
        "Processed {}/{} URLs ({:.1}%), {} skipped, {} failed",
        summary.urls_processed,
        summary.urls_total,
        summary.success_rate(),
        summary.urls_skipped,
        summary.urls_failed
    );
    tracing::info!(
        "Produced {} records from {} videos",
        summary.records,
        summary.videos
    );
}
