//! Run controller — owns one load run from config validation to summary.

use std::sync::Arc;

use futures::future::join_all;
use reqwest::Client;

use crate::aggregate::Recorder;
use crate::config::{ConfigError, RunConfig};
use crate::executor::{spawn_workers, WorkerContext};
use crate::queue::WorkQueue;
use crate::report::RunSummary;
use crate::workload::Workload;

/// Buffered items in the hand-off queue. Independent of `total_requests`;
/// the queue bounds memory, not the run.
const QUEUE_CAPACITY: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Drives the linear lifecycle of a run: validate → build client and queue →
/// start the pool → feed the workload → close → drain → summarize.
///
/// Only configuration and client construction can fail; every per-request
/// failure is absorbed into an outcome and shows up in the summary instead.
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<RunSummary, HarnessError> {
        self.config.validate()?;

        // One client for the whole pool; workers share its connection pool
        // through cheap clones. The finite timeout guarantees termination
        // against a hung endpoint.
        let client = Client::builder()
            .timeout(self.config.request_timeout)
            .build()?;

        let queue = Arc::new(WorkQueue::new(QUEUE_CAPACITY));
        let recorder = Arc::new(Recorder::new());

        tracing::info!(
            endpoint = %self.config.endpoint,
            concurrency = self.config.concurrency,
            total_requests = self.config.total_requests,
            "starting load run"
        );
        let handles = spawn_workers(
            WorkerContext {
                client,
                endpoint: self.config.endpoint.clone(),
                queue: Arc::clone(&queue),
                recorder: Arc::clone(&recorder),
            },
            self.config.concurrency,
        );

        // Single producer: feed the deterministic workload, then close. The
        // pool is already consuming, so a full queue only suspends the feed,
        // it cannot deadlock the run.
        for item in Workload::new(self.config.total_requests) {
            if queue.put(item).await.is_err() {
                break;
            }
        }
        queue.close();

        tracing::info!("workload enqueued, waiting for the pool to drain");
        join_all(handles)
            .await
            .into_iter()
            .for_each(|joined| joined.expect("worker task panicked"));

        let summary = RunSummary::from(recorder.as_ref());
        tracing::info!(
            total = summary.total,
            success = summary.success,
            average_latency_seconds = summary.average_latency_seconds,
            "run complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[tokio::test]
    async fn invalid_config_fails_before_any_work_starts() {
        let config = RunConfig::builder()
            .endpoint(Url::parse("http://127.0.0.1:9/infer").unwrap())
            .concurrency(0)
            .build();
        let err = Runner::new(config).run().await.unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Config(ConfigError::ZeroConcurrency)
        ));
    }

    #[tokio::test]
    async fn zero_request_run_yields_an_empty_summary() {
        let config = RunConfig::builder()
            .endpoint(Url::parse("http://127.0.0.1:9/infer").unwrap())
            .total_requests(0)
            .build();
        let summary = Runner::new(config).run().await.unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.success, 0);
        assert_eq!(summary.average_latency_seconds, 0.0);
    }
}
