//! # Client
//!
//! The transport seam and the configured client that drives it.

use crate::client::request::{OutgoingRequest, RequestBuilder};
use crate::dispatch::{dispatch, DecodedResponse, RawResponse, ResponseRule};
use crate::error::RuntimeResult;
use std::fmt;
use url::Url;

/// Executes an assembled request and returns the fully read response.
///
/// Non-2xx statuses are responses, not errors; only failures to obtain a
/// response at all are reported as `Err`.
pub trait RequestExecutor {
    /// Performs the request.
    fn execute(&self, request: OutgoingRequest) -> RuntimeResult<RawResponse>;
}

impl<F> RequestExecutor for F
where
    F: Fn(OutgoingRequest) -> RuntimeResult<RawResponse>,
{
    fn execute(&self, request: OutgoingRequest) -> RuntimeResult<RawResponse> {
        self(request)
    }
}

/// Callback applied to every request before it is executed.
pub type RequestEditor = Box<dyn Fn(&mut OutgoingRequest) -> RuntimeResult<()> + Send + Sync>;

/// A configured API client.
pub struct Client<E> {
    server: Url,
    executor: E,
    default_headers: Vec<(String, String)>,
    editors: Vec<RequestEditor>,
}

impl<E: RequestExecutor> Client<E> {
    /// Creates a client for `server`. A missing trailing `/` is added so that
    /// operation paths resolve below the server's base path.
    pub fn new(server: &str, executor: E) -> RuntimeResult<Self> {
        let mut server = Url::parse(server)?;
        if !server.path().ends_with('/') {
            let path = format!("{}/", server.path());
            server.set_path(&path);
        }
        Ok(Self {
            server,
            executor,
            default_headers: Vec::new(),
            editors: Vec::new(),
        })
    }

    /// Registers a request editor. Editors run in registration order.
    pub fn with_request_editor<F>(mut self, editor: F) -> Self
    where
        F: Fn(&mut OutgoingRequest) -> RuntimeResult<()> + Send + Sync + 'static,
    {
        self.editors.push(Box::new(editor));
        self
    }

    /// Adds a header sent with every request.
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// The normalized server URL.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// Builds the request and applies default headers and editors.
    pub fn request(&self, builder: RequestBuilder) -> RuntimeResult<OutgoingRequest> {
        let mut request = builder.build(&self.server)?;
        for (name, value) in &self.default_headers {
            if request.header(name).is_none() {
                request.headers.push((name.clone(), value.clone()));
            }
        }
        for editor in &self.editors {
            editor(&mut request)?;
        }
        Ok(request)
    }

    /// Sends the request and returns the raw response.
    pub fn execute(&self, builder: RequestBuilder) -> RuntimeResult<RawResponse> {
        let request = self.request(builder)?;
        log::debug!("{} {}", request.method, request.url);
        let response = self.executor.execute(request)?;
        log::debug!("received status {}", response.status);
        Ok(response)
    }

    /// Sends the request and dispatches the response over `rules`.
    pub fn send<T>(
        &self,
        builder: RequestBuilder,
        rules: &[ResponseRule<T>],
    ) -> RuntimeResult<DecodedResponse<T>> {
        dispatch(self.execute(builder)?, rules)
    }
}

impl<E> fmt::Debug for Client<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("server", &self.server.as_str())
            .field("default_headers", &self.default_headers)
            .field("editors", &self.editors.len())
            .finish_non_exhaustive()
    }
}
