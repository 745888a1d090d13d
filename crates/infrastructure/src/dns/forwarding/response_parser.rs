use dns_verifier_domain::{AnswerRecord, DomainError, RawResponse};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a reply into the RCODE and answer records verification needs.
    pub fn parse(response_bytes: &[u8]) -> Result<RawResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();
        let rcode = u16::from(message.response_code());

        debug!(
            id = message.id(),
            rcode,
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(RawResponse {
            id: message.id(),
            rcode,
            answers,
        })
    }

    fn to_answer(record: &Record) -> AnswerRecord {
        match record.data() {
            RData::A(a) => AnswerRecord::A(a.0),
            RData::AAAA(aaaa) => AnswerRecord::AAAA(aaaa.0),
            RData::CNAME(canonical) => AnswerRecord::CNAME(canonical.to_utf8()),
            RData::NS(ns) => AnswerRecord::NS(ns.to_utf8()),
            RData::MX(mx) => AnswerRecord::MX(mx.exchange().to_utf8()),
            _ => AnswerRecord::Other(u16::from(record.record_type())),
        }
    }
}
