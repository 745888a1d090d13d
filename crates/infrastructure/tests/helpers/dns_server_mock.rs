#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// One answer record carried by a mock reply.
#[derive(Debug, Clone, Copy)]
pub enum MockAnswer {
    A([u8; 4]),
    AAAA([u8; 16]),
    Cname(&'static str),
    Ns(&'static str),
    Mx(u16, &'static str),
}

/// How the mock answers each query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// NOERROR with one A record.
    AnswerA([u8; 4]),
    /// NOERROR with the given record.
    Answer(MockAnswer),
    /// The given RCODE and an empty answer section.
    Rcode(u8),
    /// Valid reply whose ID does not match the query.
    WrongId,
    /// A reply with the wrong ID, then the real A answer.
    WrongIdThenAnswer([u8; 4]),
    /// Never replies.
    Silent,
}

/// Minimal UDP DNS server for tests that must not touch real resolvers.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts the server on an ephemeral loopback port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            for response in Self::build_responses(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Every datagram sent back for `query`, in order.
    pub fn build_responses(query: &[u8], behavior: MockBehavior) -> Vec<Vec<u8>> {
        match behavior {
            MockBehavior::WrongIdThenAnswer(ip) => [
                Self::build_response(query, MockBehavior::WrongId),
                Self::build_response(query, MockBehavior::AnswerA(ip)),
            ]
            .into_iter()
            .flatten()
            .collect(),
            other => Self::build_response(query, other).into_iter().collect(),
        }
    }

    /// Builds the reply for `query`, or `None` when the mock stays silent.
    pub fn build_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (rcode, answer) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::WrongIdThenAnswer(_) => return None,
            MockBehavior::AnswerA(ip) => (0u8, Some(MockAnswer::A(ip))),
            MockBehavior::Answer(record) => (0u8, Some(record)),
            MockBehavior::WrongId => (0u8, Some(MockAnswer::A([127, 0, 0, 1]))),
            MockBehavior::Rcode(rcode) => (rcode, None),
        };

        let mut response = Vec::with_capacity(512);

        // Transaction ID
        if matches!(behavior, MockBehavior::WrongId) {
            response.push(query[0] ^ 0xff);
            response.push(query[1]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // QR=1, Opcode=0, AA=0, TC=0, RD=1 / RA=1, Z=0, RCODE
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));

        // Questions count (from query)
        response.extend_from_slice(&query[4..6]);
        // Answers count
        response.extend_from_slice(&[0x00, u8::from(answer.is_some())]);
        // Authority / Additional RRs: 0
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        // Question section (rest of query)
        response.extend_from_slice(&query[12..]);

        if let Some(record) = answer {
            let (rtype, rdata): (u16, Vec<u8>) = match record {
                MockAnswer::A(ip) => (1, ip.to_vec()),
                MockAnswer::AAAA(ip) => (28, ip.to_vec()),
                MockAnswer::Cname(name) => (5, encode_name(name)),
                MockAnswer::Ns(name) => (2, encode_name(name)),
                MockAnswer::Mx(preference, name) => {
                    let mut rdata = preference.to_be_bytes().to_vec();
                    rdata.extend_from_slice(&encode_name(name));
                    (15, rdata)
                }
            };

            response.extend_from_slice(&[0xc0, 0x0c]); // Name pointer to question
            response.extend_from_slice(&rtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]); // Class IN
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]); // TTL: 60 seconds
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Uncompressed wire form of a dotted name.
fn encode_name(name: &str) -> Vec<u8> {
    let mut wire = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.') {
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);
    wire
}
