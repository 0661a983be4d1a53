//! # Style Table
//!
//! The single place that decides which (style, location, shape, explode)
//! combinations are serializable. Encoder and decoder both consult it first.

use crate::error::{RuntimeError, RuntimeResult};
use crate::params::models::{ParameterLocation, ParameterStyle, Shape};

/// How a valid combination is composed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Comma lists, `k=v` members when exploded.
    Simple,
    /// `.`-prefixed lists.
    Label,
    /// `;name=`-prefixed lists.
    Matrix,
    /// `name=value` pairs.
    Form,
    /// One pair whose value is joined with the delimiter.
    Delimited(char),
    /// `name[key]=value` pairs.
    DeepObject,
}

impl Strategy {
    /// Separators the strategy emits between members. They are escaped inside
    /// member text.
    pub(crate) fn reserved(self) -> &'static [u8] {
        match self {
            Strategy::Simple => b",=",
            Strategy::Label => b".,=",
            Strategy::Matrix => b";,=",
            Strategy::Form => b",",
            Strategy::Delimited('|') => b"|",
            // Spaces are already escaped in the query.
            Strategy::Delimited(_) | Strategy::DeepObject => b"",
        }
    }
}

/// Looks up the strategy for a combination.
///
/// Anything not listed here is a `StyleMismatch`.
pub(crate) fn strategy(
    name: &str,
    style: ParameterStyle,
    location: ParameterLocation,
    shape: Shape,
    explode: bool,
) -> RuntimeResult<Strategy> {
    use ParameterLocation::{Cookie, Header, Path, Query};
    use ParameterStyle as S;

    let found = match (style, location, shape, explode) {
        (S::Simple, Path | Header, _, _) => Some(Strategy::Simple),
        (S::Label, Path, _, _) => Some(Strategy::Label),
        (S::Matrix, Path, _, _) => Some(Strategy::Matrix),
        (S::Form, Query, _, _) => Some(Strategy::Form),
        (S::Form, Cookie, Shape::Scalar, _) => Some(Strategy::Form),
        (S::Form, Cookie, Shape::Array | Shape::Object, false) => Some(Strategy::Form),
        (S::SpaceDelimited, Query, Shape::Array, false) => Some(Strategy::Delimited(' ')),
        (S::PipeDelimited, Query, Shape::Array, false) => Some(Strategy::Delimited('|')),
        (S::DeepObject, Query, Shape::Object, _) => Some(Strategy::DeepObject),
        _ => None,
    };

    found.ok_or_else(|| RuntimeError::StyleMismatch {
        name: name.to_string(),
        style,
        location,
        shape,
        explode,
    })
}
