//! DNS Message Builder
//!
//! Encodes a [`DnsQuestion`] into wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use dns_verifier_domain::{DnsQuestion, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and return its ID together with the bytes.
    ///
    /// The message carries a random ID, the RD flag taken from the question
    /// and a single IN-class question.
    pub fn build_query(question: &DnsQuestion) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&question.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.query_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(question.recursion_desired);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
