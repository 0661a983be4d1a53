#![deny(missing_docs)]

//! # Parameter Codec
//!
//! - **models**: Styles, locations and the `ParameterValue` tree.
//! - **scalar**: Canonical text for primitive, date, time and UUID scalars.
//! - **escape**: Percent-encoding per location.
//! - **table**: The single (style, location, shape, explode) validity table.
//! - **encode**: Value to wire fragment.
//! - **decode**: Wire fragment back to value.

pub mod decode;
pub mod encode;
pub mod escape;
pub mod models;
pub mod scalar;
pub(crate) mod table;

pub use decode::{decode, find_cookie, DecodeRequest, QueryPairs, RawParameter, Target};
pub use encode::encode;
pub use escape::{escape, escape_member, unescape, HEADER_VALUE, PATH_SEGMENT, QUERY_COMPONENT};
pub use models::{EncodeRequest, ParameterLocation, ParameterStyle, ParameterValue, Shape};
pub use scalar::{FromParam, ToParam};
