//! # ureq Transport
//!
//! Blocking [`RequestExecutor`] over `ureq`.

use crate::client::executor::RequestExecutor;
use crate::client::request::{Method, OutgoingRequest};
use crate::dispatch::RawResponse;
use crate::error::{RuntimeError, RuntimeResult};
use ureq::http::Response;
use ureq::{Agent, Body};

/// Executor backed by a `ureq::Agent`. HTTP error statuses are returned as
/// responses so the dispatcher can match them.
#[derive(Debug, Clone)]
pub struct UreqExecutor {
    agent: Agent,
}

impl UreqExecutor {
    /// Executor with a fresh agent.
    pub fn new() -> Self {
        let config = Agent::config_builder().http_status_as_error(false).build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }

    /// Executor over an existing agent. The agent should be configured with
    /// `http_status_as_error(false)`.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn transport_error(err: ureq::Error) -> RuntimeError {
    RuntimeError::transport(err)
}

macro_rules! with_headers {
    ($builder:expr, $headers:expr) => {{
        let mut builder = $builder;
        for (name, value) in $headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }};
}

impl RequestExecutor for UreqExecutor {
    fn execute(&self, request: OutgoingRequest) -> RuntimeResult<RawResponse> {
        let url = request.url.as_str();
        let body = request.body.unwrap_or_default();
        let headers = &request.headers;

        let response = match request.method {
            Method::Get => with_headers!(self.agent.get(url), headers).call(),
            Method::Delete => with_headers!(self.agent.delete(url), headers).call(),
            Method::Head => with_headers!(self.agent.head(url), headers).call(),
            Method::Options => with_headers!(self.agent.options(url), headers).call(),
            Method::Post => with_headers!(self.agent.post(url), headers).send(&body[..]),
            Method::Put => with_headers!(self.agent.put(url), headers).send(&body[..]),
            Method::Patch => with_headers!(self.agent.patch(url), headers).send(&body[..]),
        }
        .map_err(transport_error)?;

        into_raw(response)
    }
}

fn into_raw(response: Response<Body>) -> RuntimeResult<RawResponse> {
    let (parts, mut body) = response.into_parts();
    let headers = parts
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = body.read_to_vec().map_err(transport_error)?;
    Ok(RawResponse::new(parts.status.as_u16(), headers, body))
}
