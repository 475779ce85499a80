//! The run's final report and the sinks that consume it.
//!
//! A [`RunSummary`] is a pure data transformation of the drained recorder:
//! no I/O, deterministic, serializable. A [`Reporter`] is the I/O boundary;
//! it takes a finished summary and puts it somewhere (stdout here; a file or
//! a metrics backend would implement the same trait).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::aggregate::Recorder;

/// Aggregate view over one finished run.
///
/// `average_latency_seconds` is the mean over every outcome, failed requests
/// included, and is `0.0` for an empty run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: u64,
    pub success: u64,
    pub average_latency_seconds: f64,
}

impl From<&Recorder> for RunSummary {
    fn from(recorder: &Recorder) -> Self {
        Self {
            total: recorder.count(),
            success: recorder.success_count(),
            average_latency_seconds: recorder.average_latency().as_secs_f64(),
        }
    }
}

#[async_trait]
pub trait Reporter {
    async fn report(&self, summary: &RunSummary) -> Result<(), Box<dyn std::error::Error>>;
}

/// Prints the classic one-line summary to stdout.
pub struct StdoutReporter;

#[async_trait]
impl Reporter for StdoutReporter {
    async fn report(&self, summary: &RunSummary) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "Requests: {}, OK: {}, avg latency: {:.3}s",
            summary.total, summary.success, summary.average_latency_seconds
        );
        Ok(())
    }
}
