use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use rand::Rng;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::catalog::{self, Endpoint};
use crate::report;
use crate::sink::ResultsLog;
use crate::statistics::{Outcome, RunSummary};

/// Inter-request delay range for parallel workers, drawn uniformly per
/// iteration. Workers are deliberately not rate-targeted.
const WORKER_DELAY_SECS: std::ops::Range<f64> = 0.5..2.0;

#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, endpoint: &Endpoint) -> Outcome;
}

/// Serializes the per-outcome side effects: counters, results log, console
/// line. Shared by both scheduling modes; safe to call from any worker.
pub struct Recorder {
    summary: RunSummary,
    sink: ResultsLog,
    sequence: AtomicU64,
}

impl Recorder {
    #[must_use]
    pub fn new(sink: ResultsLog) -> Self {
        Self {
            summary: RunSummary::default(),
            sink,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn record(&self, outcome: &Outcome) {
        let sequence = self.sequence.fetch_add(1, Ordering::AcqRel) + 1;
        self.summary.record(outcome);
        // A log write failure mid-run is reported but never ends the run.
        if let Err(error) = self.sink.append(outcome) {
            warn!(%error, "failed to append outcome to results log");
        }
        report::print_outcome(sequence, outcome);
    }

    #[must_use]
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}

/// Single-threaded paced mode. After the n-th recorded outcome the loop
/// sleeps until `start + n / target_rate`, so the observed completion rate
/// converges on the target regardless of response latency.
pub async fn run_paced<D: Dispatch>(
    dispatcher: &D,
    entries: &'static [Endpoint],
    target_rate: f64,
    duration: Duration,
    recorder: &Recorder,
    cancel: &CancellationToken,
) {
    let start = Instant::now();
    let end = start + duration;
    let mut issued: u64 = 0;
    while !cancel.is_cancelled() && Instant::now() < end {
        let endpoint = catalog::select(entries);
        let outcome = tokio::select! {
            outcome = dispatcher.dispatch(endpoint) => outcome,
            _ = cancel.cancelled() => break,
        };
        issued += 1;
        recorder.record(&outcome);

        let deadline = start + Duration::from_secs_f64(issued as f64 / target_rate);
        tokio::select! {
            _ = tokio::time::sleep_until(deadline.min(end)) => {}
            _ = cancel.cancelled() => break,
        }
    }
}

/// Parallel mode: independent workers, each with its own randomized pacing,
/// all feeding one recorder until the shared deadline or cancellation.
pub async fn run_parallel<D>(
    dispatcher: D,
    entries: &'static [Endpoint],
    workers: usize,
    duration: Duration,
    recorder: Arc<Recorder>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    D: Dispatch + Clone + 'static,
{
    let end = Instant::now() + duration;
    let mut tasks = Vec::with_capacity(workers);
    for _ in 0..workers {
        tasks.push(tokio::spawn(run_worker(
            dispatcher.clone(),
            entries,
            end,
            recorder.clone(),
            cancel.clone(),
        )));
    }
    for task in tasks {
        task.await.context("failed to join worker")?;
    }
    Ok(())
}

async fn run_worker<D: Dispatch>(
    dispatcher: D,
    entries: &'static [Endpoint],
    end: Instant,
    recorder: Arc<Recorder>,
    cancel: CancellationToken,
) {
    while !cancel.is_cancelled() && Instant::now() < end {
        let endpoint = catalog::select(entries);
        let outcome = tokio::select! {
            outcome = dispatcher.dispatch(endpoint) => outcome,
            _ = cancel.cancelled() => break,
        };
        recorder.record(&outcome);

        let delay = rand::thread_rng().gen_range(WORKER_DELAY_SECS);
        let deadline = (Instant::now() + Duration::from_secs_f64(delay)).min(end);
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => {}
            _ = cancel.cancelled() => break,
        }
    }
}
