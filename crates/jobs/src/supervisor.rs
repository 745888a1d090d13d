use crate::ProbeWorker;
use dns_verifier_domain::Observation;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Instant};
use tracing::{info, warn};

/// How long [`Supervisor::stop`] waits for workers after signalling them.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Outcome of [`Supervisor::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShutdownSummary {
    /// Workers whose loop exited within the grace period.
    pub stopped: usize,
    /// Workers still busy with a tick when the grace period ran out.
    pub lingering: usize,
}

/// Owns every [`ProbeWorker`] for the lifetime of the process.
///
/// ```rust,ignore
/// let mut supervisor = Supervisor::new()
///     .with_worker(worker_a)
///     .with_worker(worker_b);
/// supervisor.start();
/// // ...
/// supervisor.stop().await;
/// ```
pub struct Supervisor {
    workers: Vec<Arc<ProbeWorker>>,
    handles: Vec<(Arc<ProbeWorker>, JoinHandle<Observation>)>,
    grace: Duration,
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            workers: Vec::new(),
            handles: Vec::new(),
            grace: SHUTDOWN_GRACE,
        }
    }

    pub fn with_worker(mut self, worker: ProbeWorker) -> Self {
        self.workers.push(Arc::new(worker));
        self
    }

    pub fn with_workers(mut self, workers: impl IntoIterator<Item = ProbeWorker>) -> Self {
        self.workers.extend(workers.into_iter().map(Arc::new));
        self
    }

    pub fn with_grace_period(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    pub fn workers(&self) -> &[Arc<ProbeWorker>] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Starts every worker that has not been started yet.
    pub fn start(&mut self) {
        info!(workers = self.workers.len(), "Starting supervisor");

        for worker in &self.workers {
            if let Some(handle) = Arc::clone(worker).start() {
                self.handles.push((Arc::clone(worker), handle));
            }
        }

        info!(running = self.handles.len(), "All workers started");
    }

    /// Fans the stop signal out to all workers, then waits at most the grace
    /// period for their loops to exit.
    ///
    /// Returns early once every worker is done. Workers still in the middle
    /// of a query when the period expires are logged and left detached.
    pub async fn stop(&mut self) -> ShutdownSummary {
        info!(
            workers = self.workers.len(),
            grace_ms = self.grace.as_millis() as u64,
            "Stopping supervisor"
        );

        for worker in &self.workers {
            worker.stop();
        }

        let deadline = Instant::now() + self.grace;
        let waits = self.handles.drain(..).map(|(worker, handle)| async move {
            let finished = matches!(timeout_at(deadline, handle).await, Ok(Ok(_)));
            (worker, finished)
        });

        let mut summary = ShutdownSummary::default();
        for (worker, finished) in join_all(waits).await {
            if finished {
                summary.stopped += 1;
            } else {
                warn!(worker = %worker, "Worker did not exit cleanly within grace period");
                summary.lingering += 1;
            }
        }

        info!(
            stopped = summary.stopped,
            lingering = summary.lingering,
            "Supervisor stopped"
        );
        summary
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}
