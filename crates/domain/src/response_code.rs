use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Classified DNS response code.
///
/// Only the three outcomes the verifier cares about get their own variant;
/// every other RCODE collapses into [`ResponseCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    NameError,
    ServerFailure,
    Other,
}

impl ResponseCode {
    pub const ALL: [ResponseCode; 4] = [
        ResponseCode::NoError,
        ResponseCode::NameError,
        ResponseCode::ServerFailure,
        ResponseCode::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::Other => "OTHER",
        }
    }

    /// Like `str::parse`, but unknown names become [`ResponseCode::Other`].
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(ResponseCode::Other)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOERROR" => Ok(ResponseCode::NoError),
            "NXDOMAIN" => Ok(ResponseCode::NameError),
            "SERVFAIL" => Ok(ResponseCode::ServerFailure),
            "OTHER" => Ok(ResponseCode::Other),
            other => Err(DomainError::UnsupportedResponseCode(other.to_string())),
        }
    }
}
