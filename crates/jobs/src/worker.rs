use dns_verifier_application::ports::ProbeMetrics;
use dns_verifier_application::use_cases::ProbeTargetUseCase;
use dns_verifier_domain::{DomainError, Observation, Target};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Lifecycle of a [`ProbeWorker`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    Created = 0,
    Running = 1,
    Stopped = 2,
}

impl WorkerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => WorkerState::Created,
            1 => WorkerState::Running,
            _ => WorkerState::Stopped,
        }
    }
}

/// Periodically probes one [`Target`] and publishes the outcome.
///
/// The spawned task owns the target's [`Observation`] and hands it back
/// through its `JoinHandle` once the loop exits. Stop is observed only
/// between ticks, so an in-flight query always runs to completion (bounded
/// by the resolution client's timeout).
pub struct ProbeWorker {
    target: Arc<Target>,
    probe: Arc<ProbeTargetUseCase>,
    metrics: Arc<dyn ProbeMetrics>,
    state: AtomicU8,
    shutdown: CancellationToken,
}

impl ProbeWorker {
    pub fn new(
        target: Arc<Target>,
        probe: Arc<ProbeTargetUseCase>,
        metrics: Arc<dyn ProbeMetrics>,
    ) -> Self {
        if !target.query_type().is_recognized() {
            warn!(
                domain = target.domain(),
                qtype = %target.query_type(),
                "Unrecognized query type, queries will carry type 0"
            );
        }

        Self {
            target,
            probe,
            metrics,
            state: AtomicU8::new(WorkerState::Created as u8),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_running(&self) -> bool {
        self.state() == WorkerState::Running
    }

    /// Spawns the polling loop. The first tick fires immediately.
    ///
    /// Returns `None` when the worker has already been started or stopped.
    pub fn start(self: Arc<Self>) -> Option<JoinHandle<Observation>> {
        if self.transition(WorkerState::Created, WorkerState::Running).is_err() {
            warn!(worker = %self, state = ?self.state(), "Worker already started, ignoring start");
            return None;
        }

        info!(worker = %self, "Starting worker");

        let worker = self;
        Some(tokio::spawn(async move {
            let mut observation = Observation::new();
            let mut interval = tokio::time::interval(worker.target.interval());
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = worker.shutdown.cancelled() => {
                        info!(worker = %worker, "Worker shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = worker.tick(&mut observation).await {
                            error!(
                                domain = worker.target.domain(),
                                qtype = %worker.target.query_type(),
                                error = %e,
                                "Query failed"
                            );
                        }
                    }
                }
            }

            observation
        }))
    }

    /// Runs one probe against `observation` and publishes the result.
    ///
    /// On error the observation is left untouched and only the attempt
    /// counter moves.
    pub async fn tick(&self, observation: &mut Observation) -> Result<(), DomainError> {
        debug!(worker = %self, "Probing target");
        self.metrics.record_attempt(&self.target);

        self.probe.execute(&self.target, observation).await?;

        self.metrics.record_observation(&self.target, observation);
        debug!(worker = %self, verdict = observation.verdict, "Tick published");
        Ok(())
    }

    /// Signals the loop to exit at the next tick boundary.
    ///
    /// Only the first call on a running worker has any effect.
    pub fn stop(&self) {
        match self.transition(WorkerState::Running, WorkerState::Stopped) {
            Ok(()) => {
                self.shutdown.cancel();
                info!(worker = %self, "Stop signal delivered");
            }
            Err(state) => {
                debug!(worker = %self, state = ?state, "Worker not running, stop is a no-op");
            }
        }
    }

    fn transition(&self, from: WorkerState, to: WorkerState) -> Result<(), WorkerState> {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(WorkerState::from_u8)
    }
}

impl fmt::Display for ProbeWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}
