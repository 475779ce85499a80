//! Volley — a fixed-volley HTTP load harness.
//!
//! Volley drives a remote inference endpoint with a fixed number of JSON POST
//! requests from a bounded pool of concurrent workers, measures per-request
//! outcome and latency, and reports a single aggregate summary.
//!
//! # Architecture
//!
//! The main building blocks are:
//!
//! - [`Workload`]: the finite, ordered, deterministic sequence of payloads
//!   for one run.
//! - [`WorkQueue`]: a bounded, closable hand-off buffer between the producer
//!   and the worker pool; its close signal is the run's only shutdown
//!   mechanism.
//! - [`executor`]: the worker pool, `concurrency` tasks draining the queue,
//!   each turning one [`WorkItem`] into one [`Outcome`].
//! - [`Recorder`]: the thread-safe, append-only outcome store the pool
//!   writes into.
//! - [`Runner`]: owns the end-to-end lifecycle and is the only component
//!   that can fail (on bad configuration); per-request failures are data,
//!   not errors.
//! - [`RunSummary`] / [`Reporter`]: the derived report and the sink that
//!   prints it.
//!
//! # Guarantees
//!
//! - Every enqueued item yields exactly one outcome before the run finishes;
//!   nothing is dropped or processed twice, at any concurrency.
//! - Workers exit cooperatively when the queue is closed and drained;
//!   in-flight requests are never interrupted.
//! - The run terminates even against a hung endpoint, because the client's
//!   request timeout is always finite.
//!
//! # Where to start
//!
//! [`Runner::run`] is the whole lifecycle; `src/main.rs` shows the intended
//! wiring from CLI flags and `INFERENCE_ENDPOINT` to a printed summary.

/// Thread-safe outcome accumulation
pub mod aggregate;
/// Run configuration and validation
pub mod config;
/// The worker pool turning items into outcomes
pub mod executor;
/// Per-request samples
pub mod metric;
/// Bounded closable hand-off queue
pub mod queue;
/// Summaries and reporters
pub mod report;
/// The run controller
pub mod runner;
/// Payload generation
pub mod workload;

pub use aggregate::Recorder;
pub use config::{ConfigError, RunConfig};
pub use metric::{Outcome, RequestStatus};
pub use queue::WorkQueue;
pub use report::{Reporter, RunSummary, StdoutReporter};
pub use runner::{HarnessError, Runner};
pub use workload::{WorkItem, Workload};
