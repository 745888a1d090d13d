use crate::ports::{NameserverProvider, ResolutionClient};
use crate::services::Verifier;
use dns_verifier_domain::{DomainError, Observation, Target};
use std::sync::Arc;
use tracing::debug;

/// Use case: query one target once and record the outcome in its observation.
pub struct ProbeTargetUseCase {
    client: Arc<dyn ResolutionClient>,
    nameservers: Arc<dyn NameserverProvider>,
}

impl ProbeTargetUseCase {
    pub fn new(
        client: Arc<dyn ResolutionClient>,
        nameservers: Arc<dyn NameserverProvider>,
    ) -> Self {
        Self {
            client,
            nameservers,
        }
    }

    /// Resolver override of the target, or the first system nameserver.
    pub async fn resolve_server(&self, target: &Target) -> Result<String, DomainError> {
        match target.resolver_override_address() {
            Some(server) => Ok(server),
            None => self.nameservers.default_server().await,
        }
    }

    /// On error the observation is left exactly as it was.
    pub async fn execute(
        &self,
        target: &Target,
        observation: &mut Observation,
    ) -> Result<(), DomainError> {
        let server = self.resolve_server(target).await?;
        let question = target.question();

        let exchange = self.client.query(&question, &server).await?;

        let code = Verifier::classify(exchange.response.rcode);
        observation.answers = Verifier::extract_answers(code, &exchange.response);
        observation.response_code = code;
        observation.rtt = exchange.rtt;
        observation.raw_response = Some(exchange.response);
        observation.verdict = if Verifier::verify(target, observation) {
            1.0
        } else {
            0.0
        };

        debug!(
            domain = target.domain(),
            qtype = %target.query_type(),
            server = %server,
            rcode = %code,
            rtt_ms = observation.rtt.as_millis() as u64,
            verdict = observation.verdict,
            "Query completed"
        );

        Ok(())
    }
}
