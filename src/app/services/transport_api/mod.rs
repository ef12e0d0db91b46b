//! External transport API clients
//!
//! Thin clients over the two REST APIs the CLI queries: the
//! transportapi.com train endpoints and the TfL unified API. Each call
//! composes one parameterized URL, performs a single GET, decodes the JSON
//! body, and returns it. There is no retry, pagination, or rate-limit
//! handling; failures surface as typed errors to the caller.

pub mod client;
pub mod tfl;

pub use client::{TransportApiClient, TransportApiConfig};
pub use tfl::{TflClient, TflConfig};
