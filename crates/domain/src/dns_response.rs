use crate::dns_record::AnswerRecord;

/// Raw RCODE values (RFC 1035 §4.1.1).
pub mod rcode {
    pub const NO_ERROR: u16 = 0;
    pub const FORMAT_ERROR: u16 = 1;
    pub const SERVER_FAILURE: u16 = 2;
    pub const NAME_ERROR: u16 = 3;
    pub const NOT_IMPLEMENTED: u16 = 4;
    pub const REFUSED: u16 = 5;
}

/// Decoded reply as returned by a resolution client.
///
/// Kept opaque to metrics; verification only looks at `rcode` and `answers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub id: u16,
    pub rcode: u16,
    pub answers: Vec<AnswerRecord>,
}

impl RawResponse {
    pub fn new(rcode: u16) -> Self {
        Self {
            id: 0,
            rcode,
            answers: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn with_answer(mut self, answer: AnswerRecord) -> Self {
        self.answers.push(answer);
        self
    }
}
