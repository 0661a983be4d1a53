//! # Response Dispatch
//!
//! Picks exactly one rule for a raw response and delegates body decoding to it.

use crate::dispatch::rules::ResponseRule;
use crate::error::{PayloadDecodeError, RuntimeResult};

/// A response as handed over by the transport, body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a raw response.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// First value of a header, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Content-Type` header, or `""` when absent.
    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }
}

/// Result of [`dispatch`]: the raw response plus the typed payload, if a rule matched.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Headers in arrival order.
    pub headers: Vec<(String, String)>,
    /// Body bytes, kept even when decoded.
    pub body: Vec<u8>,
    /// Decoded payload of the matched rule.
    pub payload: Option<T>,
    /// Id of the matched rule.
    pub rule: Option<String>,
}

impl<T> DecodedResponse<T> {
    /// Whether some rule matched.
    pub fn is_matched(&self) -> bool {
        self.rule.is_some()
    }

    /// The typed payload, if any.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Takes the typed payload, if any.
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// First value of a header, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Maps a response to the best matching rule.
///
/// Among rules accepting both status and content type, the most specific
/// status matcher wins; equal specificity falls back to declaration order.
/// A matched rule whose decoder fails yields `PayloadDecode`. No match is not
/// an error: the response comes back with `payload == None`.
pub fn dispatch<T>(response: RawResponse, rules: &[ResponseRule<T>]) -> RuntimeResult<DecodedResponse<T>> {
    let content_type = response.content_type();

    let mut chosen: Option<&ResponseRule<T>> = None;
    for rule in rules {
        if !rule.status.matches(response.status) || !rule.media.matches(content_type) {
            continue;
        }
        // Strictly greater keeps the earlier rule on ties.
        if chosen.map_or(true, |c| rule.status.specificity() > c.status.specificity()) {
            chosen = Some(rule);
        }
    }

    let Some(rule) = chosen else {
        log::debug!(
            "no response rule matched status {} with content type {:?}",
            response.status,
            content_type
        );
        return Ok(DecodedResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
            payload: None,
            rule: None,
        });
    };

    log::debug!(
        "response rule '{}' selected for status {} ({:?})",
        rule.id,
        response.status,
        content_type
    );

    match rule.decode(&response.body) {
        Ok(payload) => Ok(DecodedResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
            payload: Some(payload),
            rule: Some(rule.id.clone()),
        }),
        Err(source) => {
            log::warn!("response rule '{}' failed to decode body: {}", rule.id, source);
            Err(PayloadDecodeError {
                rule: rule.id.clone(),
                response,
                source,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::rules::{MediaMatcher, StatusMatcher};
    use crate::error::RuntimeError;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Pet {
        id: i64,
        name: String,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Problem {
        code: i32,
        message: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Outcome {
        Ok(Pet),
        Deleted,
        Error(Problem),
        Text(String),
    }

    fn rules() -> Vec<ResponseRule<Outcome>> {
        vec![
            ResponseRule::json("default/json", StatusMatcher::Default, "json", Outcome::Error),
            ResponseRule::json("200/json", StatusMatcher::Exact(200), "json", Outcome::Ok),
            ResponseRule::empty("204", StatusMatcher::Exact(204), || Outcome::Deleted),
        ]
    }

    fn json(status: u16, body: &str) -> RawResponse {
        RawResponse::new(
            status,
            vec![(
                "Content-Type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_exact_beats_earlier_default() {
        let decoded = dispatch(json(200, r#"{"id":1,"name":"Rex"}"#), &rules()).unwrap();
        assert_eq!(decoded.rule.as_deref(), Some("200/json"));
        assert_eq!(
            decoded.payload,
            Some(Outcome::Ok(Pet {
                id: 1,
                name: "Rex".into()
            }))
        );
    }

    #[test]
    fn test_default_catches_other_statuses() {
        let decoded = dispatch(json(404, r#"{"code":404,"message":"nope"}"#), &rules()).unwrap();
        assert_eq!(decoded.rule.as_deref(), Some("default/json"));
        assert_eq!(
            decoded.into_payload(),
            Some(Outcome::Error(Problem {
                code: 404,
                message: "nope".into()
            }))
        );
    }

    #[test]
    fn test_status_and_media_select_rule() {
        let rules = vec![
            ResponseRule::json("200/json", StatusMatcher::Exact(200), "json", Outcome::Ok),
            ResponseRule::text("200/xml", StatusMatcher::Exact(200), "xml", Outcome::Text),
            ResponseRule::json("default/json", StatusMatcher::Default, "json", Outcome::Error),
        ];
        let pet = r#"{"id":1,"name":"Rex"}"#;
        let problem = r#"{"code":404,"message":"nope"}"#;
        let cases = [
            (200, "application/json", pet, Some("200/json")),
            (200, "application/xml", "<pet/>", Some("200/xml")),
            (404, "application/json", problem, Some("default/json")),
            (404, "text/plain", "nope", None),
            (200, "", pet, None),
        ];
        for (status, content_type, body, expected) in cases {
            let headers = if content_type.is_empty() {
                vec![]
            } else {
                vec![("Content-Type".to_string(), content_type.to_string())]
            };
            let raw = RawResponse::new(status, headers, body.as_bytes().to_vec());
            let decoded = dispatch(raw, &rules).unwrap();
            assert_eq!(decoded.rule.as_deref(), expected, "{status} {content_type:?}");
            assert_eq!(decoded.is_matched(), expected.is_some());
            assert_eq!(decoded.body, body.as_bytes());
            let payload = decoded.into_payload();
            match expected {
                Some("200/json") => assert_eq!(payload, Some(Outcome::Ok(Pet { id: 1, name: "Rex".into() }))),
                Some("200/xml") => assert_eq!(payload, Some(Outcome::Text("<pet/>".into()))),
                Some(_) => assert!(matches!(payload, Some(Outcome::Error(_))), "{payload:?}"),
                None => assert_eq!(payload, None),
            }
        }
    }

    #[test]
    fn test_empty_rule_without_content_type() {
        let decoded = dispatch(RawResponse::new(204, vec![], vec![]), &rules()).unwrap();
        assert_eq!(decoded.payload, Some(Outcome::Deleted));
        assert!(decoded.is_matched());
    }

    #[test]
    fn test_no_match_keeps_raw_response() {
        let raw = RawResponse::new(
            200,
            vec![("content-type".into(), "text/plain".into())],
            b"hello".to_vec(),
        );
        let decoded = dispatch(raw, &rules()).unwrap();
        assert_eq!(decoded.payload, None);
        assert_eq!(decoded.rule, None);
        assert_eq!(decoded.status, 200);
        assert_eq!(decoded.body, b"hello".to_vec());
        assert_eq!(decoded.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn test_empty_content_type_fails_closed() {
        let raw = RawResponse::new(200, vec![], br#"{"id":1,"name":"Rex"}"#.to_vec());
        let decoded = dispatch(raw, &rules()).unwrap();
        assert!(!decoded.is_matched());
    }

    #[test]
    fn test_range_between_exact_and_default() {
        let rules: Vec<ResponseRule<Outcome>> = vec![
            ResponseRule::text("default", StatusMatcher::Default, MediaMatcher::Any, |_| {
                Outcome::Text("default".into())
            }),
            ResponseRule::text("4XX", StatusMatcher::Range(4), MediaMatcher::Any, |_| {
                Outcome::Text("4XX".into())
            }),
            ResponseRule::text("404", StatusMatcher::Exact(404), MediaMatcher::Any, |_| {
                Outcome::Text("404".into())
            }),
        ];
        let pick = |status| {
            dispatch(RawResponse::new(status, vec![], vec![]), &rules)
                .unwrap()
                .rule
        };
        assert_eq!(pick(404).as_deref(), Some("404"));
        assert_eq!(pick(418).as_deref(), Some("4XX"));
        assert_eq!(pick(500).as_deref(), Some("default"));
    }

    #[test]
    fn test_ties_use_declaration_order() {
        let rules: Vec<ResponseRule<Outcome>> = vec![
            ResponseRule::text("first", StatusMatcher::Exact(200), "text", Outcome::Text),
            ResponseRule::text("second", StatusMatcher::Exact(200), "plain", Outcome::Text),
        ];
        let raw = RawResponse::new(200, vec![("Content-Type".into(), "text/plain".into())], b"x".to_vec());
        assert_eq!(dispatch(raw, &rules).unwrap().rule.as_deref(), Some("first"));
    }

    #[test]
    fn test_matched_rule_with_bad_body() {
        let err = dispatch(json(200, "{not json"), &rules()).unwrap_err();
        match err {
            RuntimeError::PayloadDecode(inner) => {
                assert_eq!(inner.rule, "200/json");
                assert_eq!(inner.response.status, 200);
                assert_eq!(inner.response.body, b"{not json".to_vec());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let rules = rules();
        let raw = json(200, r#"{"id":7,"name":"Tom"}"#);
        let first = dispatch(raw.clone(), &rules).unwrap();
        let second = dispatch(raw, &rules).unwrap();
        assert_eq!(first, second);
    }
}
