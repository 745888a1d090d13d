pub mod udp;

pub use udp::UdpResolutionClient;
