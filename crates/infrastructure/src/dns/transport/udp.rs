use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use dns_verifier_application::ports::{Exchange, ResolutionClient};
use dns_verifier_domain::{DnsQuestion, DomainError};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Read timeout for a single query.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

const DNS_HEADER_LEN: usize = 12;

/// DNS over UDP resolution client.
///
/// Opens a fresh ephemeral socket per query and makes exactly one attempt.
pub struct UdpResolutionClient {
    timeout: Duration,
}

impl UdpResolutionClient {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn resolve_addr(server: &str) -> Result<SocketAddr, DomainError> {
        let mut addrs = tokio::net::lookup_host(server)
            .await
            .map_err(|e| DomainError::TransportFailure {
                server: server.to_string(),
                reason: format!("cannot resolve server address: {}", e),
            })?;

        addrs.next().ok_or_else(|| DomainError::TransportFailure {
            server: server.to_string(),
            reason: "server address resolved to nothing".to_string(),
        })
    }

    /// Sends the query over a socket connected to `server_addr` and waits
    /// for the reply carrying `id`.
    ///
    /// The connected socket drops datagrams from any other source. Replies
    /// with another ID are skipped. One deadline covers the whole exchange.
    async fn exchange(
        &self,
        message_bytes: &[u8],
        id: u16,
        server_addr: SocketAddr,
    ) -> Result<Vec<u8>, DomainError> {
        let server = server_addr.to_string();
        let deadline = Instant::now() + self.timeout;
        let failure = |reason: String| DomainError::TransportFailure {
            server: server.clone(),
            reason,
        };

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| failure(format!("failed to bind UDP socket: {}", e)))?;
        socket
            .connect(server_addr)
            .await
            .map_err(|e| failure(format!("failed to connect UDP socket: {}", e)))?;

        let bytes_sent = timeout_at(deadline, socket.send(message_bytes))
            .await
            .map_err(|_| self.timeout_error(&server))?
            .map_err(|e| failure(format!("failed to send UDP query: {}", e)))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = timeout_at(deadline, socket.recv(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error(&server))?
                .map_err(|e| failure(format!("failed to receive UDP response: {}", e)))?;

            match Self::wire_id(&recv_buf[..bytes_received]) {
                Some(reply_id) if reply_id == id => {
                    recv_buf.truncate(bytes_received);
                    debug!(server = %server, bytes_received, "UDP response received");
                    return Ok(recv_buf);
                }
                reply_id => {
                    warn!(
                        server = %server,
                        expected_id = id,
                        reply_id = ?reply_id,
                        bytes_received,
                        "Ignoring UDP datagram that does not answer the query"
                    );
                }
            }
        }
    }

    /// Transaction ID of a datagram, `None` when it is shorter than a header.
    fn wire_id(datagram: &[u8]) -> Option<u16> {
        if datagram.len() < DNS_HEADER_LEN {
            return None;
        }
        Some(u16::from_be_bytes([datagram[0], datagram[1]]))
    }

    fn timeout_error(&self, server: &str) -> DomainError {
        DomainError::TransportTimeout {
            server: server.to_string(),
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }
}

impl Default for UdpResolutionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolutionClient for UdpResolutionClient {
    async fn query(&self, question: &DnsQuestion, server: &str) -> Result<Exchange, DomainError> {
        let server_addr = Self::resolve_addr(server).await?;
        let (id, message_bytes) = MessageBuilder::build_query(question)?;

        let started = Instant::now();
        let response_bytes = self.exchange(&message_bytes, id, server_addr).await?;
        let rtt = started.elapsed();

        let response = ResponseParser::parse(&response_bytes)?;

        Ok(Exchange::new(response, rtt))
    }
}
