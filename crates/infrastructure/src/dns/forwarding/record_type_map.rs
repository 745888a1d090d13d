use dns_verifier_domain::QueryType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain QueryType → hickory RecordType (for building queries).
    /// Unrecognized names go out as TYPE 0.
    pub fn to_hickory(query_type: &QueryType) -> HickoryRecordType {
        match query_type {
            QueryType::A => HickoryRecordType::A,
            QueryType::AAAA => HickoryRecordType::AAAA,
            QueryType::CNAME => HickoryRecordType::CNAME,
            QueryType::MX => HickoryRecordType::MX,
            QueryType::NS => HickoryRecordType::NS,
            QueryType::Unrecognized(_) => HickoryRecordType::Unknown(0),
        }
    }
}
