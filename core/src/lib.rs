#![deny(missing_docs)]

//! # OAPI Runtime
//!
//! Runtime support for bindings generated from OpenAPI 3 documents: the
//! parameter style codec, the content-negotiated response dispatcher and the
//! request assembly used by generated clients.

/// Shared error types.
pub mod error;

/// Parameter serialization by style, explode and location.
pub mod params;

/// Response rule matching.
pub mod dispatch;

/// Request assembly and the transport seam.
pub mod client;

pub use client::{Client, Method, OutgoingRequest, RequestBuilder, RequestExecutor};
#[cfg(feature = "ureq")]
pub use client::UreqExecutor;
pub use dispatch::{dispatch, DecodedResponse, MediaMatcher, RawResponse, ResponseRule, StatusMatcher};
pub use error::{BodyError, PayloadDecodeError, RuntimeError, RuntimeResult};
pub use params::{
    decode, encode, DecodeRequest, EncodeRequest, FromParam, ParameterLocation, ParameterStyle,
    ParameterValue, QueryPairs, RawParameter, Shape, Target, ToParam,
};
