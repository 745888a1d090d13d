use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Record type requested by a monitoring target.
///
/// Unknown names are kept verbatim in [`QueryType::Unrecognized`] and are
/// sent on the wire with a zero type field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    #[default]
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    Unrecognized(Arc<str>),
}

impl QueryType {
    /// Exact, case-sensitive match. `cname` is not `CNAME`.
    pub fn parse(s: &str) -> Self {
        match s {
            "A" => QueryType::A,
            "AAAA" => QueryType::AAAA,
            "CNAME" => QueryType::CNAME,
            "MX" => QueryType::MX,
            "NS" => QueryType::NS,
            _ => QueryType::Unrecognized(Arc::from(s)),
        }
    }

    /// RFC 1035 TYPE value, `0` for unrecognized names.
    pub fn code(&self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::CNAME => 5,
            QueryType::MX => 15,
            QueryType::AAAA => 28,
            QueryType::Unrecognized(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QueryType::A => "A",
            QueryType::AAAA => "AAAA",
            QueryType::CNAME => "CNAME",
            QueryType::MX => "MX",
            QueryType::NS => "NS",
            QueryType::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, QueryType::Unrecognized(_))
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the answer section, reduced to what verification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    MX(String),
    /// Any other record kind, identified by its TYPE value.
    Other(u16),
}

impl AnswerRecord {
    /// Textual form compared against expected answers.
    /// `None` for record kinds the verifier ignores.
    pub fn text(&self) -> Option<String> {
        match self {
            AnswerRecord::A(ip) => Some(ip.to_string()),
            AnswerRecord::AAAA(ip) => Some(ip.to_string()),
            AnswerRecord::CNAME(name) | AnswerRecord::NS(name) | AnswerRecord::MX(name) => {
                Some(name.clone())
            }
            AnswerRecord::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(QueryType::parse("A"), QueryType::A);
        assert_eq!(QueryType::parse("CNAME"), QueryType::CNAME);
        assert_eq!(QueryType::parse("MX"), QueryType::MX);
        assert_eq!(QueryType::parse("NS"), QueryType::NS);
        assert_eq!(QueryType::parse("AAAA"), QueryType::AAAA);
    }

    #[test]
    fn test_lowercase_name_is_unrecognized() {
        let qtype = QueryType::parse("cname");
        assert_eq!(qtype, QueryType::Unrecognized(Arc::from("cname")));
        assert_eq!(qtype.code(), 0);
        assert_eq!(qtype.as_str(), "cname");
    }

    #[test]
    fn test_unrecognized_type_has_zero_code() {
        let qtype = QueryType::parse("TXT");
        assert!(!qtype.is_recognized());
        assert_eq!(qtype.code(), 0);
        assert_eq!(qtype.as_str(), "TXT");
    }

    #[test]
    fn test_codes_match_rfc_values() {
        assert_eq!(QueryType::A.code(), 1);
        assert_eq!(QueryType::NS.code(), 2);
        assert_eq!(QueryType::CNAME.code(), 5);
        assert_eq!(QueryType::MX.code(), 15);
    }

    #[test]
    fn test_other_records_have_no_text() {
        assert_eq!(AnswerRecord::Other(16).text(), None);
        assert_eq!(
            AnswerRecord::A(Ipv4Addr::LOCALHOST).text().as_deref(),
            Some("127.0.0.1")
        );
    }
}
