use dns_verifier_domain::dns_response::rcode;
use dns_verifier_domain::{Observation, RawResponse, ResponseCode, Target};
use tracing::info;

/// Pure checks applied to every reply: classification, answer extraction
/// and comparison against a target's expectations.
pub struct Verifier;

impl Verifier {
    /// Maps a raw RCODE onto [`ResponseCode`].
    pub fn classify(raw_rcode: u16) -> ResponseCode {
        match raw_rcode {
            rcode::NO_ERROR => ResponseCode::NoError,
            rcode::NAME_ERROR => ResponseCode::NameError,
            rcode::SERVER_FAILURE => ResponseCode::ServerFailure,
            _ => ResponseCode::Other,
        }
    }

    /// Text of every A, AAAA, CNAME, NS and MX answer, in server order.
    /// Always empty unless `code` is NOERROR.
    pub fn extract_answers(code: ResponseCode, response: &RawResponse) -> Vec<String> {
        if code != ResponseCode::NoError {
            return Vec::new();
        }

        response
            .answers
            .iter()
            .filter_map(|answer| answer.text())
            .collect()
    }

    /// Checks `observation` against the expectations of `target`.
    ///
    /// Absent expectations are not checked, so a target without any always passes.
    pub fn verify(target: &Target, observation: &Observation) -> bool {
        if let Some(expected) = target.expected_response_code() {
            if expected != observation.response_code {
                info!(
                    domain = target.domain(),
                    qtype = %target.query_type(),
                    expected = %expected,
                    actual = %observation.response_code,
                    "Response code differs from the expected one"
                );
                return false;
            }
        }

        let expected_answers = target.expected_answers();
        if !expected_answers.is_empty()
            && !Self::answers_match(expected_answers, &observation.answers)
        {
            info!(
                domain = target.domain(),
                qtype = %target.query_type(),
                expected = ?expected_answers,
                actual = ?observation.answers,
                "Answers differ from the expected ones"
            );
            return false;
        }

        true
    }

    /// Order-insensitive comparison: both lists have the same length and every
    /// expected entry appears somewhere in `observed`.
    pub fn answers_match(expected: &[String], observed: &[String]) -> bool {
        expected.len() == observed.len()
            && expected
                .iter()
                .all(|wanted| observed.iter().any(|got| got == wanted))
    }
}
