use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config.yaml found in any of: {0}")]
    NotFound(String),

    #[error("Error reading config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to decode config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Couldn't get a valid integer for the DNS_VERIFIER_APP_PORT configuration variable: {0}")]
    InvalidPort(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid request for domain <{domain}>: {reason}")]
    InvalidRequest { domain: String, reason: String },

    #[error("Yaml configuration seems empty or malformed, cannot proceed with no valid requests")]
    EmptyRequests,

    #[error("No valid requests found inside the request sections coming from yaml config")]
    NoValidRequests,
}
