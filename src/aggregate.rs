//! Thread-safe accumulation of per-request outcomes.
//!
//! The [`Recorder`] is one of the two shared mutable resources of a run (the
//! other is the work queue). Workers append outcomes in completion order;
//! the run controller reads the totals only after every worker has been
//! joined, so the read methods never race with a live pool in practice.

use std::sync::Mutex;
use std::time::Duration;

use crate::metric::Outcome;

/// Append-only outcome store shared by all workers of a run.
///
/// Each `record` is a single atomic append with respect to other appends;
/// entries are never reordered, dropped, or mutated afterward. The lock is a
/// plain `std` mutex because it is never held across an await point.
#[derive(Debug, Default)]
pub struct Recorder {
    outcomes: Mutex<Vec<Outcome>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: Outcome) {
        self.outcomes
            .lock()
            .expect("outcome store lock poisoned")
            .push(outcome);
    }

    /// Total number of recorded outcomes, failures included.
    pub fn count(&self) -> u64 {
        self.outcomes
            .lock()
            .expect("outcome store lock poisoned")
            .len() as u64
    }

    /// Number of outcomes whose status passed [`RequestStatus::is_success`].
    ///
    /// [`RequestStatus::is_success`]: crate::metric::RequestStatus::is_success
    pub fn success_count(&self) -> u64 {
        self.outcomes
            .lock()
            .expect("outcome store lock poisoned")
            .iter()
            .filter(|o| o.status.is_success())
            .count() as u64
    }

    /// Mean latency over every recorded outcome, failures included.
    ///
    /// An empty recorder yields `Duration::ZERO`; there is no division by
    /// zero for a zero-request run.
    pub fn average_latency(&self) -> Duration {
        let outcomes = self.outcomes.lock().expect("outcome store lock poisoned");
        if outcomes.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = outcomes.iter().map(|o| o.latency).sum();
        total / outcomes.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::metric::RequestStatus;

    fn outcome(status: RequestStatus, millis: u64) -> Outcome {
        Outcome::new(status, Duration::from_millis(millis))
    }

    #[test]
    fn empty_recorder_reads_as_zero() {
        let recorder = Recorder::new();
        assert_eq!(recorder.count(), 0);
        assert_eq!(recorder.success_count(), 0);
        assert_eq!(recorder.average_latency(), Duration::ZERO);
    }

    #[test]
    fn counts_successes_by_status_policy() {
        let recorder = Recorder::new();
        recorder.record(outcome(RequestStatus::Http(200), 10));
        recorder.record(outcome(RequestStatus::Http(500), 10));
        recorder.record(outcome(RequestStatus::Http(302), 10));
        recorder.record(outcome(RequestStatus::TransportError, 10));
        assert_eq!(recorder.count(), 4);
        assert_eq!(recorder.success_count(), 1);
    }

    #[test]
    fn average_includes_failed_outcomes() {
        let recorder = Recorder::new();
        recorder.record(outcome(RequestStatus::Http(200), 10));
        recorder.record(outcome(RequestStatus::TransportError, 30));
        assert_eq!(recorder.average_latency(), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() {
        let recorder = Arc::new(Recorder::new());
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let recorder = Arc::clone(&recorder);
                tokio::spawn(async move {
                    for _ in 0..250 {
                        recorder.record(outcome(RequestStatus::Http(200), 1));
                    }
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(recorder.count(), 2000);
        assert_eq!(recorder.success_count(), 2000);
    }
}
