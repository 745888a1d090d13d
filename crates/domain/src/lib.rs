//! DNS Verifier Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod response_code;
pub mod target;

pub use config::{BuiltTargets, CliOverrides, Config, ConfigError, RequestConfig};
pub use dns_query::DnsQuestion;
pub use dns_record::{AnswerRecord, QueryType};
pub use dns_response::RawResponse;
pub use errors::DomainError;
pub use response_code::ResponseCode;
pub use target::{Observation, Target};
