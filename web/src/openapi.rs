//! # Embedded Document
//!
//! The OpenAPI description the bindings were generated from, parsed once on
//! first use.

use oapi_runtime::{DecodeRequest, ParameterLocation, ParameterStyle, Target};
use once_cell::sync::Lazy;
use serde_json::Value;

const RAW: &str = include_str!("openapi.json");

static DOCUMENT: Lazy<Result<Value, serde_json::Error>> = Lazy::new(|| serde_json::from_str(RAW));

/// The parsed document.
pub fn document() -> Result<&'static Value, &'static serde_json::Error> {
    DOCUMENT.as_ref()
}

/// A parameter declaration with its OpenAPI defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeclaredParameter {
    /// Parameter name.
    pub name: String,
    /// Location.
    pub location: ParameterLocation,
    /// Declared or default style.
    pub style: ParameterStyle,
    /// Declared or default explode flag.
    pub explode: bool,
    /// Required flag; always true in the path.
    pub required: bool,
}

/// Parameters declared for `method` on `path`, or `None` if the operation is unknown.
pub(crate) fn parameters(path: &str, method: &str) -> Option<Vec<DeclaredParameter>> {
    let operation = document().ok()?.get("paths")?.get(path)?.get(method)?;
    let declared: &[Value] = match operation.get("parameters") {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    };

    declared
        .iter()
        .map(|param| {
            let name = param.get("name")?.as_str()?.to_string();
            let location: ParameterLocation = param.get("in")?.as_str()?.parse().ok()?;
            let style = match param.get("style").and_then(Value::as_str) {
                Some(s) => s.parse().ok()?,
                None => location.default_style(),
            };
            let explode = param
                .get("explode")
                .and_then(Value::as_bool)
                .unwrap_or_else(|| style.default_explode());
            let required = location == ParameterLocation::Path
                || param.get("required").and_then(Value::as_bool).unwrap_or(false);
            Some(DeclaredParameter {
                name,
                location,
                style,
                explode,
                required,
            })
        })
        .collect()
}

/// A decode request for `name` carrying the style, explode and required flags
/// the document declares for it. Undeclared parameters keep the location
/// defaults.
pub(crate) fn decode_request<'a>(
    path: &str,
    method: &str,
    name: &'a str,
    location: ParameterLocation,
    target: Target<'a>,
) -> DecodeRequest<'a> {
    let request = DecodeRequest::new(name, location, target);
    let declared = parameters(path, method)
        .and_then(|params| params.into_iter().find(|p| p.name == name && p.location == location));
    match declared {
        Some(p) => request.style(p.style).explode(p.explode).required(p.required),
        None => {
            log::warn!("{} {} declares no {} parameter '{}'", method, path, location, name);
            request
        }
    }
}
