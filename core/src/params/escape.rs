//! # Location-Aware Escaping
//!
//! Percent-encoding applied to each member before style composition. The
//! location sets leave style separators literal; [`escape_member`] additionally
//! escapes the separators the active style reserves, so a `,` or `.` inside an
//! element can never be mistaken for one the style emitted.

use crate::error::{RuntimeError, RuntimeResult};
use crate::params::models::ParameterLocation;
use percent_encoding::{
    percent_decode_str, percent_encode_byte, utf8_percent_encode, AsciiSet, CONTROLS,
    NON_ALPHANUMERIC,
};
use std::borrow::Cow;

/// Path segments keep RFC 3986 unreserved characters, sub-delimiters, `:` and `@`.
pub const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Query keys and values. `,`, `|`, `[` and `]` stay literal.
pub const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Header values only escape controls, non-ASCII text and `%` itself.
pub const HEADER_VALUE: &AsciiSet = &CONTROLS.add(b'%');

/// Escapes text for `location`.
pub fn escape(location: ParameterLocation, raw: &str) -> Cow<'_, str> {
    let set = match location {
        ParameterLocation::Path => PATH_SEGMENT,
        ParameterLocation::Query | ParameterLocation::Cookie => QUERY_COMPONENT,
        ParameterLocation::Header => HEADER_VALUE,
    };
    utf8_percent_encode(raw, set).into()
}

/// Escapes one member of a composed value: everything [`escape`] does, plus
/// every byte in `reserved`.
pub fn escape_member<'a>(location: ParameterLocation, raw: &'a str, reserved: &[u8]) -> Cow<'a, str> {
    let escaped = escape(location, raw);
    if !escaped.bytes().any(|b| reserved.contains(&b)) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 2 * reserved.len());
    for ch in escaped.chars() {
        match u8::try_from(ch) {
            Ok(b) if reserved.contains(&b) => out.push_str(percent_encode_byte(b)),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Reverses [`escape_member`] for one piece of a fragment.
///
/// In the query a literal `+` also reads as a space.
pub fn unescape<'a>(
    name: &str,
    location: ParameterLocation,
    raw: &'a str,
) -> RuntimeResult<Cow<'a, str>> {
    let malformed =
        |e: std::str::Utf8Error| RuntimeError::malformed(name, raw, format!("invalid percent-encoding: {}", e));
    if location == ParameterLocation::Query && raw.contains('+') {
        let spaced = raw.replace('+', " ");
        return percent_decode_str(&spaced)
            .decode_utf8()
            .map(|c| Cow::Owned(c.into_owned()))
            .map_err(malformed);
    }
    percent_decode_str(raw).decode_utf8().map_err(malformed)
}
