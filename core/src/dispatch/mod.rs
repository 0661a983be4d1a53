#![deny(missing_docs)]

//! # Response Dispatcher
//!
//! - **rules**: Status and media-type matchers plus the rule record.
//! - **response**: Raw and decoded responses and the `dispatch` routine.

pub mod response;
pub mod rules;

pub use response::{dispatch, DecodedResponse, RawResponse};
pub use rules::{MediaMatcher, ResponseRule, StatusMatcher};
