#![deny(missing_docs)]

//! # Client Helpers
//!
//! - **request**: `RequestBuilder` and the assembled `OutgoingRequest`.
//! - **executor**: The `RequestExecutor` transport seam and `Client`.
//! - **transport**: `UreqExecutor` (feature `ureq`).

pub mod executor;
pub mod request;
#[cfg(feature = "ureq")]
pub mod transport;

pub use executor::{Client, RequestEditor, RequestExecutor};
pub use request::{Method, OutgoingRequest, RequestBuilder};
#[cfg(feature = "ureq")]
pub use transport::UreqExecutor;
