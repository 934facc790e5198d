//! HTTP transport module
//!
//! The dispatcher talks to the network through the [`Transport`] trait,
//! which exposes a single `GET(url) -> (status, body)` operation.
//! [`HttpClient`] is the reqwest-backed implementation used by default.
//!
//! There are no retries and no rate limiting here: one call, one GET.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RawResponse, Transport};
