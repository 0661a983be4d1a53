//! # Error Handling
//!
//! Provides the unified `RuntimeError` enum returned by the codec, the
//! dispatcher and the client helpers.

use crate::dispatch::RawResponse;
use crate::params::{ParameterLocation, ParameterStyle, Shape};
use derive_more::{Display, From};
use std::fmt;

/// Boxed error produced by a body decoder.
pub type BodyError = Box<dyn std::error::Error + Send + Sync>;

/// The Global Error Enum.
///
/// Struct variants are created explicitly and never through `From`.
#[derive(Debug, Display, From)]
pub enum RuntimeError {
    /// The (style, location, shape, explode) combination is not serializable.
    #[from(ignore)]
    #[display(
        "Style mismatch for parameter '{name}': style '{style}' (explode={explode}) cannot carry {shape} values in {location}"
    )]
    StyleMismatch {
        /// Parameter name.
        name: String,
        /// Requested style.
        style: ParameterStyle,
        /// Requested location.
        location: ParameterLocation,
        /// Shape of the value or decode target.
        shape: Shape,
        /// Requested explode flag.
        explode: bool,
    },

    /// The value nests deeper than the styles can express.
    #[from(ignore)]
    #[display("Unsupported shape for parameter '{name}': {detail}")]
    UnsupportedShape {
        /// Parameter name.
        name: String,
        /// What was found.
        detail: String,
    },

    /// A required parameter was absent from the input.
    #[from(ignore)]
    #[display("Missing required parameter '{name}'")]
    MissingParameter {
        /// Parameter name.
        name: String,
    },

    /// A parameter was present but could not be parsed into the target.
    #[from(ignore)]
    #[display("Invalid format for parameter '{name}' (raw value {raw:?}): {reason}")]
    MalformedParameter {
        /// Parameter name.
        name: String,
        /// The raw wire value.
        raw: String,
        /// Human readable cause.
        reason: String,
    },

    /// A response matched a rule but its body did not decode.
    #[display("{_0}")]
    PayloadDecode(Box<PayloadDecodeError>),

    /// URL assembly failed.
    #[display("URL Error: {_0}")]
    Url(url::ParseError),

    /// Request body serialization failed.
    #[display("Body Error: {_0}")]
    Body(serde_json::Error),

    /// The injected executor could not complete the exchange.
    #[from(ignore)]
    #[display("Transport Error: {_0}")]
    Transport(BodyError),
}

impl RuntimeError {
    /// Builds a `MalformedParameter` error.
    pub fn malformed(
        name: impl Into<String>,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RuntimeError::MalformedParameter {
            name: name.into(),
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Builds a `Transport` error from any error or message.
    pub fn transport(err: impl Into<BodyError>) -> Self {
        RuntimeError::Transport(err.into())
    }

    /// Builds an `UnsupportedShape` error.
    pub fn unsupported(name: impl Into<String>, detail: impl Into<String>) -> Self {
        RuntimeError::UnsupportedShape {
            name: name.into(),
            detail: detail.into(),
        }
    }

    /// True for failures caused by the peer's input rather than by the bindings.
    ///
    /// Server scaffolding answers these with `400 Bad Request`.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            RuntimeError::MissingParameter { .. } | RuntimeError::MalformedParameter { .. }
        )
    }

    /// The parameter this error is about, if any.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            RuntimeError::StyleMismatch { name, .. }
            | RuntimeError::UnsupportedShape { name, .. }
            | RuntimeError::MissingParameter { name }
            | RuntimeError::MalformedParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::PayloadDecode(e) => Some(e.as_ref()),
            RuntimeError::Url(e) => Some(e),
            RuntimeError::Body(e) => Some(e),
            RuntimeError::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<PayloadDecodeError> for RuntimeError {
    fn from(value: PayloadDecodeError) -> Self {
        RuntimeError::PayloadDecode(Box::new(value))
    }
}

/// A matched response rule whose body failed to decode.
///
/// Keeps the complete raw response so callers can still inspect the status,
/// headers and body bytes.
#[derive(Debug)]
pub struct PayloadDecodeError {
    /// Identifier of the matched rule.
    pub rule: String,
    /// The response as received.
    pub response: RawResponse,
    /// The decoder's error.
    pub source: BodyError,
}

impl fmt::Display for PayloadDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payload Decode Error: rule '{}' matched status {} but the body did not decode: {}",
            self.rule, self.response.status, self.source
        )
    }
}

impl std::error::Error for PayloadDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Helper type alias for Result using RuntimeError.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
