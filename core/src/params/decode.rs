//! # Style Decoding
//!
//! The inverse of [`encode`](crate::params::encode): turns what arrived on the
//! wire back into a [`ParameterValue`]. The requested [`Target`] decides how
//! ambiguous input (one query entry vs. repeated keys) is read.

use crate::error::{RuntimeError, RuntimeResult};
use crate::params::escape::{escape_member, unescape};
use crate::params::models::{ParameterLocation, ParameterStyle, ParameterValue, Shape};
use crate::params::table::{strategy, Strategy};
use indexmap::IndexMap;

/// The structure a decoder is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A single value.
    Scalar,
    /// A list of values.
    Array,
    /// An object. The declared field names select the members of an exploded
    /// `form` object, where each field travels under its own name.
    Object(&'a [&'a str]),
}

impl Target<'_> {
    /// The coarse shape of the target.
    pub fn shape(&self) -> Shape {
        match self {
            Target::Scalar => Shape::Scalar,
            Target::Array => Shape::Array,
            Target::Object(_) => Shape::Object,
        }
    }
}

/// One parameter to read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRequest<'a> {
    /// Parameter name as declared.
    pub name: &'a str,
    /// Serialization style.
    pub style: ParameterStyle,
    /// Explode modifier.
    pub explode: bool,
    /// Where the parameter was sent.
    pub location: ParameterLocation,
    /// The requested shape.
    pub target: Target<'a>,
    /// Whether absence is an error. Path parameters are always required.
    pub required: bool,
}

impl<'a> DecodeRequest<'a> {
    /// Creates a request with the location's default style and explode flag.
    pub fn new(name: &'a str, location: ParameterLocation, target: Target<'a>) -> Self {
        let style = location.default_style();
        Self {
            name,
            style,
            explode: style.default_explode(),
            location,
            target,
            required: location == ParameterLocation::Path,
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

    /// Marks the parameter as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required || self.location == ParameterLocation::Path;
        self
    }
}

/// Parsed query string: `(key, value)` pairs in arrival order.
///
/// Keys are decoded. Values stay escaped until the decoder has split them on
/// the style's separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Parses a raw query string (with or without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self(
            raw.split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let value = pair.split_once('=').map_or("", |(_, v)| v);
                    let key = url::form_urlencoded::parse(pair.as_bytes())
                        .next()
                        .map(|(k, _)| k.into_owned())
                        .unwrap_or_default();
                    (key, value.to_string())
                })
                .collect(),
        )
    }

    /// All raw values for `key`, in order.
    pub fn values<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The first raw value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no pair was sent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryPairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Finds a cookie's raw value in a `Cookie` header.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

/// What arrived for one parameter.
#[derive(Debug, Clone, Copy)]
pub enum RawParameter<'a> {
    /// The raw (still escaped) value of a path segment, header, cookie or
    /// lone query entry. `None` when absent.
    Value(Option<&'a str>),
    /// The whole parsed query string.
    Query(&'a QueryPairs),
}

/// Decodes one parameter.
///
/// Returns `Ok(None)` for an absent optional parameter and
/// `MissingParameter` for an absent required one.
pub fn decode(
    request: &DecodeRequest<'_>,
    input: RawParameter<'_>,
) -> RuntimeResult<Option<ParameterValue>> {
    let strategy = strategy(
        request.name,
        request.style,
        request.location,
        request.target.shape(),
        request.explode,
    )?;

    let decoded = match (request.location, input) {
        (ParameterLocation::Query, RawParameter::Query(pairs)) => {
            decode_query(request, strategy, pairs)?
        }
        (ParameterLocation::Query, RawParameter::Value(raw)) => match raw {
            Some(raw) => {
                let pairs = QueryPairs(vec![(request.name.to_string(), raw.to_string())]);
                decode_query(request, strategy, &pairs)?
            }
            None => None,
        },
        (_, RawParameter::Query(pairs)) => match pairs.first(request.name) {
            Some(raw) => Some(decode_fragment(request, strategy, raw)?),
            None => None,
        },
        (_, RawParameter::Value(raw)) => match raw {
            Some(raw) => Some(decode_fragment(request, strategy, raw)?),
            None => None,
        },
    };

    match decoded {
        Some(value) => Ok(Some(value)),
        None if request.required => Err(RuntimeError::MissingParameter {
            name: request.name.to_string(),
        }),
        None => Ok(None),
    }
}

type Clean<'c> = &'c dyn Fn(&str) -> RuntimeResult<String>;

fn split_list<'r>(raw: &'r str, sep: &str) -> Vec<&'r str> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(sep).collect()
    }
}

fn array_of(pieces: &[&str], clean: Clean<'_>) -> RuntimeResult<ParameterValue> {
    pieces
        .iter()
        .map(|p| clean(*p).map(ParameterValue::Scalar))
        .collect::<RuntimeResult<Vec<_>>>()
        .map(ParameterValue::Array)
}

/// Alternating `k, v, k, v` members.
fn object_of_flat(
    name: &str,
    raw: &str,
    pieces: &[&str],
    clean: Clean<'_>,
) -> RuntimeResult<ParameterValue> {
    if pieces.len() % 2 != 0 {
        return Err(RuntimeError::malformed(
            name,
            raw,
            "object members must alternate key and value",
        ));
    }
    let mut fields = IndexMap::new();
    for pair in pieces.chunks(2) {
        fields.insert(clean(pair[0])?, ParameterValue::Scalar(clean(pair[1])?));
    }
    Ok(ParameterValue::Object(fields))
}

/// `k=v` members.
fn object_of_assignments(
    name: &str,
    pieces: &[&str],
    clean: Clean<'_>,
) -> RuntimeResult<ParameterValue> {
    let mut fields = IndexMap::new();
    for piece in pieces {
        let (k, v) = piece
            .split_once('=')
            .ok_or_else(|| RuntimeError::malformed(name, *piece, "expected key=value"))?;
        fields.insert(clean(k)?, ParameterValue::Scalar(clean(v)?));
    }
    Ok(ParameterValue::Object(fields))
}

fn decode_list(
    request: &DecodeRequest<'_>,
    raw: &str,
    sep: &str,
    assign: bool,
    clean: Clean<'_>,
) -> RuntimeResult<ParameterValue> {
    match request.target {
        Target::Scalar => clean(raw).map(ParameterValue::Scalar),
        Target::Array => array_of(&split_list(raw, sep), clean),
        Target::Object(_) if assign => {
            object_of_assignments(request.name, &split_list(raw, sep), clean)
        }
        Target::Object(_) => object_of_flat(request.name, raw, &split_list(raw, sep), clean),
    }
}

fn strip<'r>(request: &DecodeRequest<'_>, raw: &'r str, prefix: &str) -> RuntimeResult<&'r str> {
    raw.strip_prefix(prefix).ok_or_else(|| {
        RuntimeError::malformed(
            request.name,
            raw,
            format!("{} values must start with '{}'", request.style, prefix),
        )
    })
}

fn decode_fragment(
    request: &DecodeRequest<'_>,
    strategy: Strategy,
    raw: &str,
) -> RuntimeResult<ParameterValue> {
    let (name, location) = (request.name, request.location);
    let unescape_piece = move |piece: &str| -> RuntimeResult<String> {
        unescape(name, location, piece).map(|c| c.into_owned())
    };
    let clean: Clean<'_> = &unescape_piece;

    match strategy {
        Strategy::Simple => decode_list(request, raw, ",", request.explode, clean),
        Strategy::Label => {
            let body = strip(request, raw, ".")?;
            let sep = if request.explode && request.target != Target::Scalar {
                "."
            } else {
                ","
            };
            decode_list(request, body, sep, request.explode, clean)
        }
        Strategy::Matrix => {
            let named = format!(";{}=", escape_member(location, name, strategy.reserved()));
            match (request.target, request.explode) {
                (Target::Array, true) => {
                    let body = strip(request, raw, ";")?;
                    let items = split_list(body, ";")
                        .into_iter()
                        .map(|item| {
                            item.strip_prefix(&named[1..]).ok_or_else(|| {
                                RuntimeError::malformed(name, raw, format!("expected '{}'", &named[1..]))
                            })
                        })
                        .collect::<RuntimeResult<Vec<_>>>()?;
                    array_of(&items, clean)
                }
                (Target::Object(_), true) => {
                    let body = strip(request, raw, ";")?;
                    object_of_assignments(name, &split_list(body, ";"), clean)
                }
                _ => {
                    let body = strip(request, raw, &named)?;
                    decode_list(request, body, ",", false, clean)
                }
            }
        }
        Strategy::Form | Strategy::DeepObject => decode_list(request, raw, ",", false, clean),
        Strategy::Delimited(sep) => decode_list(request, raw, &delimiter(sep), false, clean),
    }
}

/// The wire form of a delimiter; a space separator travels as `%20`.
fn delimiter(sep: char) -> String {
    if sep == ' ' {
        "%20".to_string()
    } else {
        sep.to_string()
    }
}

fn decode_query(
    request: &DecodeRequest<'_>,
    strategy: Strategy,
    pairs: &QueryPairs,
) -> RuntimeResult<Option<ParameterValue>> {
    let name = request.name;
    let unescape_piece = move |piece: &str| -> RuntimeResult<String> {
        unescape(name, ParameterLocation::Query, piece).map(|c| c.into_owned())
    };
    let clean: Clean<'_> = &unescape_piece;

    match strategy {
        Strategy::Form => match request.target {
            Target::Scalar => pairs
                .first(name)
                .map(|v| clean(v).map(ParameterValue::Scalar))
                .transpose(),
            Target::Array => {
                let values: Vec<&str> = pairs.values(name).collect();
                if values.is_empty() {
                    return Ok(None);
                }
                if request.explode {
                    array_of(&values, clean).map(Some)
                } else {
                    let items: Vec<&str> = values.iter().flat_map(|v| split_list(v, ",")).collect();
                    array_of(&items, clean).map(Some)
                }
            }
            Target::Object(fields) if request.explode => {
                if fields.is_empty() {
                    return Err(RuntimeError::unsupported(
                        name,
                        "an exploded form object needs its declared field names",
                    ));
                }
                let mut found = IndexMap::new();
                for field in fields.iter() {
                    if let Some(v) = pairs.first(field) {
                        found.insert(field.to_string(), ParameterValue::Scalar(clean(v)?));
                    }
                }
                Ok((!found.is_empty()).then_some(ParameterValue::Object(found)))
            }
            Target::Object(_) => match pairs.first(name) {
                Some(raw) => object_of_flat(name, raw, &split_list(raw, ","), clean).map(Some),
                None => Ok(None),
            },
        },
        Strategy::Delimited(sep) => {
            let values: Vec<&str> = pairs.values(name).collect();
            if values.is_empty() {
                return Ok(None);
            }
            let sep = delimiter(sep);
            let items: Vec<&str> = values.iter().flat_map(|v| split_list(v, &sep)).collect();
            array_of(&items, clean).map(Some)
        }
        Strategy::DeepObject => {
            let prefix = format!("{}[", name);
            let mut fields = IndexMap::new();
            for (key, value) in pairs.iter() {
                let Some(inner) = key.strip_prefix(&prefix).and_then(|k| k.strip_suffix(']')) else {
                    continue;
                };
                if inner.contains('[') || inner.contains(']') {
                    return Err(RuntimeError::unsupported(
                        name,
                        format!("nested deepObject key '{}' is not supported", key),
                    ));
                }
                fields.insert(inner.to_string(), ParameterValue::Scalar(clean(value)?));
            }
            Ok((!fields.is_empty()).then_some(ParameterValue::Object(fields)))
        }
        Strategy::Simple | Strategy::Label | Strategy::Matrix => match pairs.first(name) {
            Some(raw) => decode_fragment(request, strategy, raw).map(Some),
            None => Ok(None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::encode::encode;
    use crate::params::models::EncodeRequest;
    use pretty_assertions::assert_eq;
    use ParameterLocation::*;

    const FIELDS: &[&str] = &["tags", "limit"];

    fn tags_limit() -> ParameterValue {
        ParameterValue::object([("tags", "x"), ("limit", "5")])
    }

    fn target_for(value: &ParameterValue) -> Target<'static> {
        match value {
            ParameterValue::Scalar(_) => Target::Scalar,
            ParameterValue::Array(_) => Target::Array,
            ParameterValue::Object(_) => Target::Object(FIELDS),
        }
    }

    /// Encodes, then feeds the wire text back the way a server would see it.
    fn round_trip(
        value: ParameterValue,
        style: ParameterStyle,
        explode: bool,
        location: ParameterLocation,
    ) -> ParameterValue {
        let name = "p";
        let wire = encode(&EncodeRequest {
            name: name.to_string(),
            value: value.clone(),
            style,
            explode,
            location,
        })
        .unwrap();
        let request = DecodeRequest {
            name,
            style,
            explode,
            location,
            target: target_for(&value),
            required: true,
        };
        let decoded = match location {
            Query => decode(&request, RawParameter::Query(&QueryPairs::parse(&wire))),
            Cookie => {
                let raw = find_cookie(&wire, name);
                decode(&request, RawParameter::Value(raw))
            }
            Path | Header => decode(&request, RawParameter::Value(Some(&wire))),
        };
        decoded.unwrap().unwrap()
    }

    #[test]
    fn test_round_trip_all_valid_combinations() {
        let values = [
            ParameterValue::Scalar("hello world/1".into()),
            ParameterValue::Scalar("a,b.c;d=e|f g+h%".into()),
            ParameterValue::array(&["a", "b/c", "d"]),
            ParameterValue::array(&["1.5", "2.0"]),
            ParameterValue::array(&["a,b", "c|d", "e f"]),
            tags_limit(),
            ParameterValue::object([("tags", "x,y.z"), ("limit", "1=2;3")]),
        ];
        let combos = [
            (ParameterStyle::Simple, Path),
            (ParameterStyle::Simple, Header),
            (ParameterStyle::Label, Path),
            (ParameterStyle::Matrix, Path),
            (ParameterStyle::Form, Query),
            (ParameterStyle::Form, Cookie),
            (ParameterStyle::SpaceDelimited, Query),
            (ParameterStyle::PipeDelimited, Query),
            (ParameterStyle::DeepObject, Query),
        ];
        let mut checked = 0;
        for (style, location) in combos {
            for explode in [false, true] {
                for value in &values {
                    let valid = strategy("p", style, location, value.shape(), explode).is_ok();
                    if !valid {
                        continue;
                    }
                    let decoded = round_trip(value.clone(), style, explode, location);
                    assert_eq!(&decoded, value, "{style} explode={explode} {location}");
                    checked += 1;
                }
            }
        }
        assert!(checked > 40, "only {checked} combinations checked");
    }

    #[test]
    fn test_separator_text_survives_round_trip() {
        let cases = [
            (ParameterValue::array(&["1.5", "2.0"]), ParameterStyle::Label, true, Path),
            (ParameterValue::array(&["a,b", "c"]), ParameterStyle::Simple, false, Path),
            (ParameterValue::array(&["a,b", "c"]), ParameterStyle::Form, false, Query),
            (ParameterValue::array(&["a;b=c", "d"]), ParameterStyle::Matrix, true, Path),
            (ParameterValue::array(&["a|b", "c"]), ParameterStyle::PipeDelimited, false, Query),
        ];
        for (value, style, explode, location) in cases {
            let decoded = round_trip(value.clone(), style, explode, location);
            assert_eq!(decoded, value, "{style} explode={explode} {location}");
        }
    }

    #[test]
    fn test_empty_exploded_array_reads_as_absent() {
        let wire = encode(&EncodeRequest {
            name: "tags".into(),
            value: ParameterValue::Array(vec![]),
            style: ParameterStyle::Form,
            explode: true,
            location: Query,
        })
        .unwrap();
        assert_eq!(wire, "");

        let pairs = QueryPairs::parse(&wire);
        let optional = DecodeRequest::new("tags", Query, Target::Array);
        assert_eq!(decode(&optional, RawParameter::Query(&pairs)).unwrap(), None);
        let err = decode(&optional.required(true), RawParameter::Query(&pairs)).unwrap_err();
        assert!(matches!(err, RuntimeError::MissingParameter { .. }));
    }

    #[test]
    fn test_query_values_split_before_unescaping() {
        let pairs = QueryPairs::parse("tags=a%2Cb,c&q=x+y");
        assert_eq!(pairs.first("tags"), Some("a%2Cb,c"));
        let request = DecodeRequest::new("tags", Query, Target::Array).explode(false);
        let value = decode(&request, RawParameter::Query(&pairs)).unwrap().unwrap();
        assert_eq!(value, ParameterValue::array(&["a,b", "c"]));

        let request = DecodeRequest::new("q", Query, Target::Scalar);
        let value = decode(&request, RawParameter::Query(&pairs)).unwrap().unwrap();
        assert_eq!(value, ParameterValue::Scalar("x y".into()));
    }

    #[test]
    fn test_required_query_parameter_missing() {
        let pairs = QueryPairs::parse("other=1");
        let request = DecodeRequest::new("limit", Query, Target::Scalar).required(true);
        let err = decode(&request, RawParameter::Query(&pairs)).unwrap_err();
        match err {
            RuntimeError::MissingParameter { name } => assert_eq!(name, "limit"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_optional_query_parameter_missing() {
        let pairs = QueryPairs::parse("");
        let request = DecodeRequest::new("limit", Query, Target::Scalar);
        assert_eq!(decode(&request, RawParameter::Query(&pairs)).unwrap(), None);
    }

    #[test]
    fn test_single_entry_decodes_to_single_element_array() {
        let pairs = QueryPairs::parse("?tags=x");
        for explode in [true, false] {
            let request = DecodeRequest::new("tags", Query, Target::Array).explode(explode);
            let value = decode(&request, RawParameter::Query(&pairs)).unwrap().unwrap();
            assert_eq!(value, ParameterValue::array(&["x"]));
        }
    }

    #[test]
    fn test_target_shape_disambiguates_repeated_keys() {
        let pairs = QueryPairs::parse("tags=x&tags=y");
        let scalar = decode(
            &DecodeRequest::new("tags", Query, Target::Scalar),
            RawParameter::Query(&pairs),
        )
        .unwrap()
        .unwrap();
        assert_eq!(scalar, ParameterValue::Scalar("x".into()));

        let array = decode(
            &DecodeRequest::new("tags", Query, Target::Array),
            RawParameter::Query(&pairs),
        )
        .unwrap()
        .unwrap();
        assert_eq!(array, ParameterValue::array(&["x", "y"]));
    }

    #[test]
    fn test_exploded_form_object_reads_field_names() {
        let pairs = QueryPairs::parse("tags=x&limit=5&unrelated=1");
        let request = DecodeRequest::new("params", Query, Target::Object(FIELDS));
        let value = decode(&request, RawParameter::Query(&pairs)).unwrap().unwrap();
        assert_eq!(value, tags_limit());

        let request = DecodeRequest::new("params", Query, Target::Object(&[]));
        let err = decode(&request, RawParameter::Query(&pairs)).unwrap_err();
        assert!(matches!(err, RuntimeError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_malformed_scalar_carries_name_and_raw() {
        let request = DecodeRequest::new("id", Path, Target::Scalar);
        let value = decode(&request, RawParameter::Value(Some("abc")))
            .unwrap()
            .unwrap();
        let err = value.into_scalar::<i64>("id").unwrap_err();
        match err {
            RuntimeError::MalformedParameter { name, raw, .. } => {
                assert_eq!(name, "id");
                assert_eq!(raw, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_structures() {
        let flat = DecodeRequest::new("p", Path, Target::Object(&[]));
        let err = decode(&flat, RawParameter::Value(Some("a,1,b"))).unwrap_err();
        assert!(matches!(err, RuntimeError::MalformedParameter { .. }));

        let label = DecodeRequest::new("p", Path, Target::Scalar).style(ParameterStyle::Label);
        let err = decode(&label, RawParameter::Value(Some("5"))).unwrap_err();
        assert!(matches!(err, RuntimeError::MalformedParameter { .. }));

        let matrix = DecodeRequest::new("p", Path, Target::Scalar).style(ParameterStyle::Matrix);
        let err = decode(&matrix, RawParameter::Value(Some(";q=5"))).unwrap_err();
        assert!(matches!(err, RuntimeError::MalformedParameter { .. }));
    }

    #[test]
    fn test_path_parameter_always_required() {
        let request = DecodeRequest::new("id", Path, Target::Scalar).required(false);
        let err = decode(&request, RawParameter::Value(None)).unwrap_err();
        assert!(matches!(err, RuntimeError::MissingParameter { .. }));
    }

    #[test]
    fn test_nested_deep_object_rejected() {
        let pairs = QueryPairs::parse("filter[a][b]=1");
        let request = DecodeRequest::new("filter", Query, Target::Object(&[]))
            .style(ParameterStyle::DeepObject);
        let err = decode(&request, RawParameter::Query(&pairs)).unwrap_err();
        assert!(matches!(err, RuntimeError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_decode_rejects_invalid_combination() {
        let pairs = QueryPairs::parse("tags=x");
        let request = DecodeRequest::new("tags", Query, Target::Scalar)
            .style(ParameterStyle::PipeDelimited);
        let err = decode(&request, RawParameter::Query(&pairs)).unwrap_err();
        assert!(matches!(err, RuntimeError::StyleMismatch { .. }));
    }

    #[test]
    fn test_empty_value_is_empty_array() {
        let pairs = QueryPairs::parse("tags=");
        let request = DecodeRequest::new("tags", Query, Target::Array).explode(false);
        let value = decode(&request, RawParameter::Query(&pairs)).unwrap().unwrap();
        assert_eq!(value, ParameterValue::Array(vec![]));
    }

    #[test]
    fn test_find_cookie() {
        let header = "theme=dark; session=abc%20def; empty=";
        assert_eq!(find_cookie(header, "session"), Some("abc%20def"));
        assert_eq!(find_cookie(header, "empty"), Some(""));
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn test_lone_query_value() {
        let request = DecodeRequest::new("tags", Query, Target::Array);
        let value = decode(&request, RawParameter::Value(Some("a")))
            .unwrap()
            .unwrap();
        assert_eq!(value, ParameterValue::array(&["a"]));
    }
}
