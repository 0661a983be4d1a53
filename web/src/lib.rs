#![deny(missing_docs)]

//! # Petstore Web Library
//!
//! Bindings for the petstore-expanded API built on `oapi-runtime`: schema
//! models, a typed client, the actix-web server wrapper and an in-memory store.

/// Schema types.
pub mod models;

/// Typed client operations and their response rules.
pub mod client;

/// Parameter binding and route registration.
pub mod server;

/// In-memory implementation of the API.
pub mod store;

/// The embedded OpenAPI document.
pub mod openapi;

pub use client::PetstoreClient;
pub use server::{configure, ApiError, PetstoreApi};
pub use store::PetStore;
