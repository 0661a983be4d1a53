#![deny(missing_docs)]

//! # Parameter Models
//!
//! The value model shared by the encoder and the decoder: styles, locations,
//! shapes and the `ParameterValue` tree.

use crate::error::{RuntimeError, RuntimeResult};
use crate::params::scalar::{FromParam, ToParam};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// Parameter serialization style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterStyle {
    /// `simple`
    Simple,
    /// `form`
    Form,
    /// `label`
    Label,
    /// `matrix`
    Matrix,
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

impl ParameterStyle {
    /// The OpenAPI spelling of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterStyle::Simple => "simple",
            ParameterStyle::Form => "form",
            ParameterStyle::Label => "label",
            ParameterStyle::Matrix => "matrix",
            ParameterStyle::SpaceDelimited => "spaceDelimited",
            ParameterStyle::PipeDelimited => "pipeDelimited",
            ParameterStyle::DeepObject => "deepObject",
        }
    }

    /// Default explode flag for the style.
    ///
    /// `form` defaults to true, every other style to false.
    pub fn default_explode(&self) -> bool {
        matches!(self, ParameterStyle::Form)
    }
}

impl fmt::Display for ParameterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(ParameterStyle::Simple),
            "form" => Ok(ParameterStyle::Form),
            "label" => Ok(ParameterStyle::Label),
            "matrix" => Ok(ParameterStyle::Matrix),
            "spaceDelimited" => Ok(ParameterStyle::SpaceDelimited),
            "pipeDelimited" => Ok(ParameterStyle::PipeDelimited),
            "deepObject" => Ok(ParameterStyle::DeepObject),
            other => Err(format!("unknown parameter style '{}'", other)),
        }
    }
}

/// Where a parameter travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    /// A templated path segment.
    Path,
    /// The query string.
    Query,
    /// A request header.
    Header,
    /// A cookie.
    Cookie,
}

impl ParameterLocation {
    /// The OpenAPI spelling of the location (`in` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }

    /// Default style for the location.
    ///
    /// `query` and `cookie` default to `form`; `path` and `header` to `simple`.
    pub fn default_style(&self) -> ParameterStyle {
        match self {
            ParameterLocation::Query | ParameterLocation::Cookie => ParameterStyle::Form,
            ParameterLocation::Path | ParameterLocation::Header => ParameterStyle::Simple,
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(ParameterLocation::Path),
            "query" => Ok(ParameterLocation::Query),
            "header" => Ok(ParameterLocation::Header),
            "cookie" => Ok(ParameterLocation::Cookie),
            other => Err(format!("unknown parameter location '{}'", other)),
        }
    }
}

/// Coarse structure of a value or of a decode target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single canonicalized value.
    Scalar,
    /// An ordered list of scalars.
    Array,
    /// A map of field names to scalars.
    Object,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Scalar => "scalar",
            Shape::Array => "array",
            Shape::Object => "object",
        })
    }
}

/// A parameter value after scalar canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// Canonical string form of a scalar.
    Scalar(String),
    /// Ordered elements.
    Array(Vec<ParameterValue>),
    /// Named fields. Encoding follows insertion order.
    Object(IndexMap<String, ParameterValue>),
}

impl ParameterValue {
    /// Canonicalizes a scalar.
    pub fn scalar<T: ToParam + ?Sized>(value: &T) -> Self {
        ParameterValue::Scalar(value.to_param())
    }

    /// Canonicalizes every element of a slice.
    pub fn array<T: ToParam>(values: &[T]) -> Self {
        ParameterValue::Array(values.iter().map(ParameterValue::scalar).collect())
    }

    /// Builds an object from `(field, scalar)` pairs.
    pub fn object<K, T, I>(fields: I) -> Self
    where
        K: Into<String>,
        T: ToParam,
        I: IntoIterator<Item = (K, T)>,
    {
        ParameterValue::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), ParameterValue::scalar(&v)))
                .collect(),
        )
    }

    /// Converts a JSON value. `null` anywhere is rejected.
    pub fn from_json(name: &str, value: &JsonValue) -> RuntimeResult<Self> {
        match value {
            JsonValue::Null => Err(RuntimeError::unsupported(name, "null has no parameter form")),
            JsonValue::Bool(b) => Ok(ParameterValue::scalar(b)),
            JsonValue::Number(n) => Ok(ParameterValue::Scalar(n.to_string())),
            JsonValue::String(s) => Ok(ParameterValue::Scalar(s.clone())),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| ParameterValue::from_json(name, item))
                .collect::<RuntimeResult<Vec<_>>>()
                .map(ParameterValue::Array),
            JsonValue::Object(fields) => fields
                .iter()
                .map(|(k, v)| ParameterValue::from_json(name, v).map(|v| (k.clone(), v)))
                .collect::<RuntimeResult<IndexMap<_, _>>>()
                .map(ParameterValue::Object),
        }
    }

    /// Converts to JSON with every scalar as a string.
    pub fn to_json(&self) -> JsonValue {
        match self {
            ParameterValue::Scalar(s) => JsonValue::String(s.clone()),
            ParameterValue::Array(items) => {
                JsonValue::Array(items.iter().map(ParameterValue::to_json).collect())
            }
            ParameterValue::Object(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// The top-level shape.
    pub fn shape(&self) -> Shape {
        match self {
            ParameterValue::Scalar(_) => Shape::Scalar,
            ParameterValue::Array(_) => Shape::Array,
            ParameterValue::Object(_) => Shape::Object,
        }
    }

    /// Parses a scalar into `T`.
    pub fn into_scalar<T: FromParam>(self, name: &str) -> RuntimeResult<T> {
        match self {
            ParameterValue::Scalar(raw) => parse_scalar(name, &raw),
            other => Err(shape_error(name, Shape::Scalar, &other)),
        }
    }

    /// Parses every element of an array into `T`.
    pub fn into_array<T: FromParam>(self, name: &str) -> RuntimeResult<Vec<T>> {
        match self {
            ParameterValue::Array(items) => items
                .into_iter()
                .map(|item| item.into_scalar(name))
                .collect(),
            other => Err(shape_error(name, Shape::Array, &other)),
        }
    }

    /// Unwraps an object.
    pub fn into_object(self, name: &str) -> RuntimeResult<IndexMap<String, ParameterValue>> {
        match self {
            ParameterValue::Object(fields) => Ok(fields),
            other => Err(shape_error(name, Shape::Object, &other)),
        }
    }

    /// Parses one field of an object, `None` when the field is absent.
    pub fn field<T: FromParam>(&self, name: &str, key: &str) -> RuntimeResult<Option<T>> {
        let ParameterValue::Object(fields) = self else {
            return Err(shape_error(name, Shape::Object, self));
        };
        match fields.get(key) {
            None => Ok(None),
            Some(ParameterValue::Scalar(raw)) => parse_scalar(name, raw).map(Some),
            Some(other) => Err(RuntimeError::unsupported(
                name,
                format!("field '{}' holds {} instead of a scalar", key, other.shape()),
            )),
        }
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Scalar(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Scalar(value.to_string())
    }
}

fn parse_scalar<T: FromParam>(name: &str, raw: &str) -> RuntimeResult<T> {
    T::from_param(raw).map_err(|reason| RuntimeError::malformed(name, raw, reason))
}

fn shape_error(name: &str, wanted: Shape, got: &ParameterValue) -> RuntimeError {
    RuntimeError::malformed(
        name,
        got.to_json().to_string(),
        format!("expected {} but found {}", wanted, got.shape()),
    )
}

/// One parameter to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeRequest {
    /// Parameter name as declared.
    pub name: String,
    /// The canonicalized value.
    pub value: ParameterValue,
    /// Serialization style.
    pub style: ParameterStyle,
    /// Explode modifier.
    pub explode: bool,
    /// Target location.
    pub location: ParameterLocation,
}

impl EncodeRequest {
    /// Creates a request with the location's default style and that style's
    /// default explode flag.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
        location: ParameterLocation,
    ) -> Self {
        let style = location.default_style();
        Self {
            name: name.into(),
            value: value.into(),
            style,
            explode: style.default_explode(),
            location,
        }
    }

    /// Overrides the style. The explode flag is reset to the style's default.
    pub fn style(mut self, style: ParameterStyle) -> Self {
        self.style = style;
        self.explode = style.default_explode();
        self
    }

    /// Overrides the explode flag.
    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }
}
