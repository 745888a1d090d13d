use dns_verifier_api::AppState;
use dns_verifier_application::ports::ProbeMetrics;
use dns_verifier_application::use_cases::ProbeTargetUseCase;
use dns_verifier_domain::Target;
use dns_verifier_infrastructure::dns::UdpResolutionClient;
use dns_verifier_infrastructure::metrics::PrometheusMetrics;
use dns_verifier_infrastructure::system::ResolvConfReader;
use dns_verifier_jobs::{ProbeWorker, Supervisor};
use std::sync::Arc;

/// Process-wide collaborators shared by every worker and the HTTP layer.
pub struct Services {
    pub metrics: Arc<PrometheusMetrics>,
    pub probe: Arc<ProbeTargetUseCase>,
}

impl Services {
    pub fn new() -> anyhow::Result<Self> {
        let metrics = Arc::new(PrometheusMetrics::new()?);
        let probe = Arc::new(ProbeTargetUseCase::new(
            Arc::new(UdpResolutionClient::new()),
            Arc::new(ResolvConfReader::new()),
        ));

        Ok(Self { metrics, probe })
    }

    /// One worker per target, none started yet.
    pub fn build_supervisor(&self, targets: Vec<Target>) -> Supervisor {
        let sink: Arc<dyn ProbeMetrics> = self.metrics.clone();

        Supervisor::new().with_workers(targets.into_iter().map(|target| {
            ProbeWorker::new(Arc::new(target), Arc::clone(&self.probe), Arc::clone(&sink))
        }))
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(Arc::clone(&self.metrics))
    }
}
