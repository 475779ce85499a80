//! Worker pool — the executors that turn queued work items into outcomes.
//!
//! Each worker is a tokio task looping: dequeue one item, POST it to the
//! endpoint, read the response body to completion, record the outcome, and
//! go back for more. A worker suspends only while waiting on the queue or
//! on the HTTP exchange, and exits only when the queue reports
//! closed-and-empty, so shutdown is the queue's close signal
//! consumed cooperatively, never a forced cancellation of in-flight work.
//!
//! Per-request failures stay inside the loop: a connect error, timeout, or
//! truncated body becomes a `TransportError` outcome and the worker moves
//! on. One bad exchange can never stall the pool or leak a dequeued item.

use std::sync::Arc;

use reqwest::Client;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use url::Url;

use crate::aggregate::Recorder;
use crate::metric::{Outcome, RequestStatus};
use crate::queue::WorkQueue;
use crate::workload::WorkItem;

/// Everything a worker shares with the rest of the pool.
///
/// Cloning is cheap: the client clones share one connection pool, and the
/// queue and recorder are behind `Arc`.
#[derive(Clone)]
pub struct WorkerContext {
    pub client: Client,
    pub endpoint: Url,
    pub queue: Arc<WorkQueue<WorkItem>>,
    pub recorder: Arc<Recorder>,
}

/// Spawn `workers` tasks draining the shared queue.
///
/// The pool is drained once every returned handle has completed; the caller
/// must join them all before reading the recorder.
pub fn spawn_workers(ctx: WorkerContext, workers: usize) -> Vec<JoinHandle<()>> {
    (0..workers)
        .map(|id| {
            let ctx = ctx.clone();
            tokio::spawn(worker_loop(id, ctx))
        })
        .collect()
}

async fn worker_loop(id: usize, ctx: WorkerContext) {
    tracing::debug!(worker = id, "worker started");
    while let Some(item) = ctx.queue.get().await {
        let outcome = send_one(&ctx.client, &ctx.endpoint, &item).await;
        if !outcome.status.is_success() {
            tracing::debug!(
                worker = id,
                image_id = item.image_id,
                status = ?outcome.status,
                "request failed"
            );
        }
        ctx.recorder.record(outcome);
    }
    tracing::debug!(worker = id, "queue closed and drained, worker exiting");
}

/// Issue one POST and measure it.
///
/// Latency spans from just before the request is sent until the response
/// body has been read to completion, so it covers the full exchange. A body
/// that cannot be read counts as a transport failure even though a status
/// line arrived.
async fn send_one(client: &Client, endpoint: &Url, item: &WorkItem) -> Outcome {
    let start = Instant::now();
    let status = match client.post(endpoint.clone()).json(item).send().await {
        Ok(response) => {
            let code = response.status().as_u16();
            match response.bytes().await {
                Ok(_) => RequestStatus::Http(code),
                Err(_) => RequestStatus::TransportError,
            }
        }
        Err(_) => RequestStatus::TransportError,
    };
    Outcome::new(status, start.elapsed())
}
