//! # Response Rules
//!
//! One record per (status, media type, target) entry of an operation's
//! responses, evaluated by [`dispatch`](crate::dispatch::dispatch).

use crate::error::BodyError;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Status predicate of a response rule, keyed like OpenAPI response keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMatcher {
    /// One status code, e.g. `200`.
    Exact(u16),
    /// A status class, e.g. `2` for `2XX`.
    Range(u8),
    /// The `default` entry.
    Default,
}

impl StatusMatcher {
    /// Whether `status` is accepted.
    pub fn matches(&self, status: u16) -> bool {
        match self {
            StatusMatcher::Exact(code) => *code == status,
            StatusMatcher::Range(class) => status / 100 == u16::from(*class),
            StatusMatcher::Default => true,
        }
    }

    /// Higher wins: exact, then range, then default.
    pub fn specificity(&self) -> u8 {
        match self {
            StatusMatcher::Exact(_) => 2,
            StatusMatcher::Range(_) => 1,
            StatusMatcher::Default => 0,
        }
    }
}

impl fmt::Display for StatusMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMatcher::Exact(code) => write!(f, "{}", code),
            StatusMatcher::Range(class) => write!(f, "{}XX", class),
            StatusMatcher::Default => f.write_str("default"),
        }
    }
}

impl FromStr for StatusMatcher {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(StatusMatcher::Default);
        }
        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(format!("invalid response key '{}'", s));
        }
        if bytes[1..].eq_ignore_ascii_case(b"XX") {
            return match bytes[0] {
                b'1'..=b'5' => Ok(StatusMatcher::Range(bytes[0] - b'0')),
                _ => Err(format!("invalid status range '{}'", s)),
            };
        }
        s.parse::<u16>()
            .ok()
            .filter(|code| (100..=599).contains(code))
            .map(StatusMatcher::Exact)
            .ok_or_else(|| format!("invalid status code '{}'", s))
    }
}

/// Content-type predicate of a response rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaMatcher {
    /// Any content type, including none.
    Any,
    /// Case-insensitive substring of the `Content-Type` value.
    Contains(Cow<'static, str>),
}

impl MediaMatcher {
    /// Whether `content_type` is accepted. An empty value never matches `Contains`.
    pub fn matches(&self, content_type: &str) -> bool {
        match self {
            MediaMatcher::Any => true,
            MediaMatcher::Contains(needle) => {
                !content_type.is_empty()
                    && content_type
                        .to_ascii_lowercase()
                        .contains(&needle.to_ascii_lowercase())
            }
        }
    }
}

impl From<&'static str> for MediaMatcher {
    fn from(value: &'static str) -> Self {
        MediaMatcher::Contains(Cow::Borrowed(value))
    }
}

impl From<String> for MediaMatcher {
    fn from(value: String) -> Self {
        MediaMatcher::Contains(Cow::Owned(value))
    }
}

type Decoder<T> = Box<dyn Fn(&[u8]) -> Result<T, BodyError> + Send + Sync>;

/// A response rule producing payloads of type `T`.
///
/// `T` is usually an enum with one variant per documented response.
pub struct ResponseRule<T> {
    /// Identifier reported in logs and decode errors, e.g. `"200/json"`.
    pub id: String,
    /// Status predicate.
    pub status: StatusMatcher,
    /// Content-type predicate.
    pub media: MediaMatcher,
    decoder: Decoder<T>,
}

impl<T> ResponseRule<T> {
    /// Rule with an arbitrary body decoder.
    pub fn with_decoder<F>(
        id: impl Into<String>,
        status: StatusMatcher,
        media: impl Into<MediaMatcher>,
        decoder: F,
    ) -> Self
    where
        F: Fn(&[u8]) -> Result<T, BodyError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            status,
            media: media.into(),
            decoder: Box::new(decoder),
        }
    }

    /// Rule that parses the body as JSON into `P` and wraps it.
    pub fn json<P, W>(
        id: impl Into<String>,
        status: StatusMatcher,
        media: impl Into<MediaMatcher>,
        wrap: W,
    ) -> Self
    where
        P: DeserializeOwned,
        W: Fn(P) -> T + Send + Sync + 'static,
    {
        Self::with_decoder(id, status, media, move |body: &[u8]| {
            serde_json::from_slice::<P>(body)
                .map(&wrap)
                .map_err(|e| Box::new(e) as BodyError)
        })
    }

    /// Rule that reads the body as UTF-8 text.
    pub fn text<W>(
        id: impl Into<String>,
        status: StatusMatcher,
        media: impl Into<MediaMatcher>,
        wrap: W,
    ) -> Self
    where
        W: Fn(String) -> T + Send + Sync + 'static,
    {
        Self::with_decoder(id, status, media, move |body: &[u8]| {
            String::from_utf8(body.to_vec())
                .map(&wrap)
                .map_err(|e| Box::new(e) as BodyError)
        })
    }

    /// Structural no-payload rule (e.g. `204`). Matches any content type and
    /// ignores the body.
    pub fn empty<W>(id: impl Into<String>, status: StatusMatcher, wrap: W) -> Self
    where
        W: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_decoder(id, status, MediaMatcher::Any, move |_: &[u8]| Ok(wrap()))
    }

    /// Runs the decoder.
    pub(crate) fn decode(&self, body: &[u8]) -> Result<T, BodyError> {
        (self.decoder)(body)
    }
}

impl<T> fmt::Debug for ResponseRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseRule")
            .field("id", &self.id)
            .field("status", &self.status)
            .field("media", &self.media)
            .finish_non_exhaustive()
    }
}
