use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How one HTTP exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// The endpoint answered with this status code.
    Http(u16),
    /// The request never produced a status code: connect failure, timeout,
    /// or the response body could not be read to completion.
    TransportError,
}

impl RequestStatus {
    /// A request succeeds only on a literal `200`.
    ///
    /// Redirects and other 2xx codes count as failures, as do transport
    /// errors. This mirrors the tally the harness has always produced and is
    /// a visible behavior, not an implementation detail.
    pub fn is_success(&self) -> bool {
        matches!(self, RequestStatus::Http(200))
    }
}

/// The recorded result of processing one work item.
///
/// Produced exactly once per dequeued item by the worker that sent it,
/// appended to the recorder in completion order, never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: RequestStatus,
    pub latency: Duration,
}

impl Outcome {
    pub fn new(status: RequestStatus, latency: Duration) -> Self {
        Self { status, latency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_200_is_a_success() {
        assert!(RequestStatus::Http(200).is_success());
        assert!(!RequestStatus::Http(201).is_success());
        assert!(!RequestStatus::Http(302).is_success());
        assert!(!RequestStatus::Http(500).is_success());
        assert!(!RequestStatus::TransportError.is_success());
    }
}
