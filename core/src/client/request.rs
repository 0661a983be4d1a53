//! # Request Assembly
//!
//! Collects encoded parameter fragments into an [`OutgoingRequest`].

use crate::error::{RuntimeError, RuntimeResult};
use crate::params::{encode, EncodeRequest, ParameterLocation};
use serde::Serialize;
use std::fmt;
use url::Url;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

impl Method {
    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled request, ready for a [`RequestExecutor`](crate::client::RequestExecutor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: Url,
    /// Headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

impl OutgoingRequest {
    /// First value of a header, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Replaces every value of `name` with `value`.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }
}

/// Builder for one operation call.
///
/// Parameters may be added in any order; path placeholders are filled when
/// the request is built against a server URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    template: String,
    path: Vec<(String, String)>,
    query: Vec<String>,
    headers: Vec<(String, String)>,
    cookies: Vec<String>,
    body: Option<(String, Vec<u8>)>,
}

impl RequestBuilder {
    /// Starts a request for `template`, e.g. `/pets/{id}`.
    pub fn new(method: Method, template: impl Into<String>) -> Self {
        Self {
            method,
            template: template.into(),
            path: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            cookies: Vec::new(),
            body: None,
        }
    }

    /// Encodes a parameter and routes the fragment to its location.
    ///
    /// A query or cookie parameter that encodes to nothing, such as an empty
    /// exploded array, is left out; the receiver reads it as absent.
    pub fn param(mut self, request: &EncodeRequest) -> RuntimeResult<Self> {
        let encoded = encode(request)?;
        match request.location {
            ParameterLocation::Path => self.path.push((request.name.clone(), encoded)),
            ParameterLocation::Query | ParameterLocation::Cookie if encoded.is_empty() => {
                log::debug!("skipping empty {} parameter '{}'", request.location, request.name);
            }
            ParameterLocation::Query => self.query.push(encoded),
            ParameterLocation::Header => self.headers.push((request.name.clone(), encoded)),
            ParameterLocation::Cookie => self.cookies.push(encoded),
        }
        Ok(self)
    }

    /// Adds an optional parameter; `None` is skipped.
    pub fn optional_param(self, request: Option<EncodeRequest>) -> RuntimeResult<Self> {
        match request {
            Some(request) => self.param(&request),
            None => Ok(self),
        }
    }

    /// Adds a literal header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serializes `body` as JSON.
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> RuntimeResult<Self> {
        let bytes = serde_json::to_vec(body)?;
        self.body = Some(("application/json".to_string(), bytes));
        Ok(self)
    }

    /// Attaches a raw body with an explicit content type.
    pub fn raw_body(mut self, content_type: impl Into<String>, body: Vec<u8>) -> Self {
        self.body = Some((content_type.into(), body));
        self
    }

    /// Resolves the template against `server` and assembles the request.
    ///
    /// `server` is expected to end in `/` so that its base path is kept.
    pub fn build(self, server: &Url) -> RuntimeResult<OutgoingRequest> {
        let path = self.fill_template()?;
        let mut url = server.join(path.trim_start_matches('/'))?;
        if !self.query.is_empty() {
            url.set_query(Some(&self.query.join("&")));
        }

        let mut headers = self.headers;
        if !self.cookies.is_empty() {
            headers.push(("Cookie".to_string(), self.cookies.join("; ")));
        }
        let body = self.body.map(|(content_type, bytes)| {
            headers.push(("Content-Type".to_string(), content_type));
            bytes
        });

        Ok(OutgoingRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }

    fn fill_template(&self) -> RuntimeResult<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            let close = rest[open..].find('}').map(|i| open + i).ok_or_else(|| {
                RuntimeError::malformed("path", self.template.as_str(), "unterminated placeholder")
            })?;
            let name = &rest[open + 1..close];
            let value = self
                .path
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
                .ok_or_else(|| RuntimeError::MissingParameter {
                    name: name.to_string(),
                })?;
            out.push_str(&rest[..open]);
            out.push_str(value);
            rest = &rest[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
