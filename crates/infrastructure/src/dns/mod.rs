pub mod forwarding;
pub mod transport;

pub use transport::udp::{UdpResolutionClient, DEFAULT_QUERY_TIMEOUT};
