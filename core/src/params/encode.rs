//! # Style Encoding
//!
//! Turns an [`EncodeRequest`] into the wire fragment for its location:
//! an escaped path fragment, a header value, `k=v&k=v` query pairs or a
//! `name=value` cookie pair.

use crate::error::{RuntimeError, RuntimeResult};
use crate::params::escape::escape_member;
use crate::params::models::{EncodeRequest, ParameterLocation, ParameterValue};
use crate::params::table::{strategy, Strategy};

/// A value reduced to one level of nesting.
enum Flat<'a> {
    Scalar(&'a str),
    Array(Vec<&'a str>),
    Object(Vec<(&'a str, &'a str)>),
}

/// Result of style composition, already escaped.
enum Composed {
    Fragment(String),
    Pairs(Vec<(String, String)>),
}

type Escape<'e> = &'e dyn Fn(&str) -> String;

/// Serializes one parameter.
///
/// Every member is escaped on its own, including the separators the style
/// reserves, and then joined with literal separators.
pub fn encode(request: &EncodeRequest) -> RuntimeResult<String> {
    let name = request.name.as_str();
    let flat = flatten(name, &request.value)?;
    let strategy = strategy(
        name,
        request.style,
        request.location,
        request.value.shape(),
        request.explode,
    )?;

    let location = request.location;
    let escape_text = move |raw: &str| escape_member(location, raw, strategy.reserved()).into_owned();
    let encoded = match compose(name, strategy, request.explode, &flat, &escape_text) {
        Composed::Fragment(fragment) => fragment,
        Composed::Pairs(pairs) => {
            let joiner = if location == ParameterLocation::Cookie {
                "; "
            } else {
                "&"
            };
            pairs
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(joiner)
        }
    };

    log::trace!(
        "encoded {} parameter '{}' ({}, explode={}) as {:?}",
        location,
        name,
        request.style,
        request.explode,
        encoded
    );
    Ok(encoded)
}

fn flatten<'a>(name: &str, value: &'a ParameterValue) -> RuntimeResult<Flat<'a>> {
    match value {
        ParameterValue::Scalar(s) => Ok(Flat::Scalar(s)),
        ParameterValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                ParameterValue::Scalar(s) => Ok(s.as_str()),
                other => Err(RuntimeError::unsupported(
                    name,
                    format!("array element {} is {}, only scalars can be listed", i, other.shape()),
                )),
            })
            .collect::<RuntimeResult<Vec<_>>>()
            .map(Flat::Array),
        ParameterValue::Object(fields) => fields
            .iter()
            .map(|(k, v)| match v {
                ParameterValue::Scalar(s) => Ok((k.as_str(), s.as_str())),
                other => Err(RuntimeError::unsupported(
                    name,
                    format!("field '{}' is {}, only scalar fields can be serialized", k, other.shape()),
                )),
            })
            .collect::<RuntimeResult<Vec<_>>>()
            .map(Flat::Object),
    }
}

/// Escaped members of a value: elements, `k=v` assignments or alternating `k, v`.
fn members(flat: &Flat<'_>, assign: bool, esc: Escape<'_>) -> Vec<String> {
    match flat {
        Flat::Scalar(s) => vec![esc(*s)],
        Flat::Array(items) => items.iter().map(|s| esc(*s)).collect(),
        Flat::Object(fields) if assign => fields
            .iter()
            .map(|(k, v)| format!("{}={}", esc(*k), esc(*v)))
            .collect(),
        Flat::Object(fields) => fields.iter().flat_map(|(k, v)| [esc(*k), esc(*v)]).collect(),
    }
}

fn compose(name: &str, strategy: Strategy, explode: bool, flat: &Flat<'_>, esc: Escape<'_>) -> Composed {
    match strategy {
        Strategy::Simple => Composed::Fragment(members(flat, explode, esc).join(",")),
        Strategy::Label => {
            let sep = if explode { "." } else { "," };
            Composed::Fragment(format!(".{}", members(flat, explode, esc).join(sep)))
        }
        Strategy::Matrix => Composed::Fragment(match (flat, explode) {
            (Flat::Object(_), true) => members(flat, true, esc)
                .iter()
                .map(|m| format!(";{}", m))
                .collect(),
            (Flat::Array(items), true) => {
                let name = esc(name);
                items
                    .iter()
                    .map(|item| format!(";{}={}", name, esc(*item)))
                    .collect()
            }
            _ => format!(";{}={}", esc(name), members(flat, false, esc).join(",")),
        }),
        Strategy::Form => Composed::Pairs(match (flat, explode) {
            (Flat::Array(items), true) => items
                .iter()
                .map(|item| (esc(name), esc(*item)))
                .collect(),
            // Exploded objects use each field name as the parameter name.
            (Flat::Object(fields), true) => fields.iter().map(|(k, v)| (esc(*k), esc(*v))).collect(),
            _ => vec![(esc(name), members(flat, false, esc).join(","))],
        }),
        // Spaces inside members travel as `+`, the separator as `%20`.
        Strategy::Delimited(' ') => {
            let items: Vec<String> = members(flat, false, esc)
                .iter()
                .map(|m| m.replace("%20", "+"))
                .collect();
            Composed::Pairs(vec![(esc(name), items.join("%20"))])
        }
        Strategy::Delimited(sep) => {
            let sep = sep.to_string();
            Composed::Pairs(vec![(esc(name), members(flat, false, esc).join(sep.as_str()))])
        }
        Strategy::DeepObject => Composed::Pairs(match flat {
            Flat::Object(fields) => fields
                .iter()
                .map(|(k, v)| (format!("{}[{}]", esc(name), esc(*k)), esc(*v)))
                .collect(),
            _ => vec![(esc(name), members(flat, false, esc).join(","))],
        }),
    }
}
