//! Endpoint registry
//!
//! The static table of Steam Web API methods this client knows how to call.
//!
//! # Overview
//!
//! Each [`EndpointSpec`] is authoritative for the URL path of its method,
//! whether the `key` query parameter is injected, and which parameters are
//! accepted (and which of those are required). The table is `'static` and
//! never changes at runtime.

mod endpoints;
mod types;

pub use endpoints::{all, lookup, ENDPOINTS};
pub use types::{EndpointSpec, ParamKind, ParamSpec};
