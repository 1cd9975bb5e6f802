use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Local};
use hyper::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Http(u16),
    Failed(&'static str),
}

impl Status {
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Http(code) if (200..300).contains(code))
    }

    /// Status column value for the results log; transport-level failures
    /// carry no HTTP status and are written as the sentinel `0`.
    #[inline]
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Status::Http(code) => *code,
            Status::Failed(_) => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub timestamp: DateTime<Local>,
    pub method: Method,
    pub path: &'static str,
    pub url: String,
    pub elapsed: Duration,
    pub status: Status,
}

/// Aggregate counters shared across workers. Plain atomic increments,
/// no lock; `total == succeeded + failed` holds for every finished run.
#[derive(Debug, Default)]
pub struct RunSummary {
    total: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    elapsed_micros: AtomicU64,
}

impl RunSummary {
    pub fn record(&self, outcome: &Outcome) {
        self.total.fetch_add(1, Ordering::AcqRel);
        if outcome.status.is_success() {
            self.succeeded.fetch_add(1, Ordering::AcqRel);
        } else {
            self.failed.fetch_add(1, Ordering::AcqRel);
        }
        self.elapsed_micros
            .fetch_add(outcome.elapsed.as_micros() as u64, Ordering::AcqRel);
    }

    #[must_use]
    pub fn snapshot(&self) -> SummarySnapshot {
        SummarySnapshot {
            total: self.total.load(Ordering::Acquire),
            succeeded: self.succeeded.load(Ordering::Acquire),
            failed: self.failed.load(Ordering::Acquire),
            elapsed_micros: self.elapsed_micros.load(Ordering::Acquire),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySnapshot {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
    elapsed_micros: u64,
}

impl SummarySnapshot {
    #[must_use]
    pub fn error_rate_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.failed as f64 * 100.0 / self.total as f64
    }

    /// Mean over every recorded outcome; failed and timed-out requests
    /// contribute their elapsed time like any other.
    #[must_use]
    pub fn mean_response_secs(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.elapsed_micros as f64 / 1_000_000.0 / self.total as f64
    }
}
