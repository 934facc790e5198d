//! Steam Web API client
//!
//! [`SteamClient`] resolves a method name against the
//! [registry](crate::registry), checks the API key, validates and completes
//! the parameter set, builds the URL, performs one GET through its
//! [`Transport`](crate::http::Transport), and decodes the body.
//!
//! ```text
//! RESOLVE_ENDPOINT → CHECK_KEY → VALIDATE_PARAMS → CHECK_REQUIRED
//!                  → BUILD_URL → SEND → DECODE
//! ```
//!
//! Every stage before SEND fails without touching the network. The result
//! is delivered exactly once, either as the awaited value or through the
//! callback passed to [`SteamClient::send_with_callback`].

mod dispatcher;
mod methods;

pub use dispatcher::{RequestContext, SteamClient};
