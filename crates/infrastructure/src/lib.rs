//! DNS Verifier Infrastructure Layer
pub mod dns;
pub mod metrics;
pub mod system;
