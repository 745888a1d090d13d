//! Configuration module for DNS Verifier
//!
//! - `root`: top-level settings, file discovery, environment and CLI overrides
//! - `request`: one monitoring request as written in the YAML file
//! - `errors`: configuration errors

pub mod errors;
pub mod request;
pub mod root;

pub use errors::ConfigError;
pub use request::RequestConfig;
pub use root::{BuiltTargets, CliOverrides, Config};
