// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

//! # Steam Web API client
//!
//! A small async client that maps Steam Web API method names onto HTTP GET
//! requests against `api.steampowered.com`.
//!
//! ## Features
//!
//! - **Endpoint registry**: every supported method with its interface,
//!   version, key requirement and parameter rules
//! - **Local validation**: malformed Steam IDs, relationship filters and
//!   counts are rejected before any network traffic
//! - **Response formats**: JSON, XML (decoded into a JSON tree) or raw VDF
//! - **Timeouts and cancellation**: every request is bounded
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use steam_webapi::{Result, SteamClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut client = SteamClient::new()?;
//!     client.set_api_key("0123456789ABCDEF0123456789ABCDEF");
//!
//!     let news = client.get_news_for_app(440, 3, 300).await?;
//!     println!("{:?}", news.as_json());
//!
//!     let friends = client.get_friend_list("76561197960435530", "friend").await?;
//!     println!("{:?}", friends.as_json());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! method, params
//!       │
//!       ▼
//! ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌────────┐
//! │ Registry │──▶│ Validate │──▶│ Build URL │──▶│  HTTP  │
//! └──────────┘   └──────────┘   └───────────┘   └────────┘
//!                                                    │
//!                                                    ▼
//!                                              ┌──────────┐
//!                                              │  Decode  │
//!                                              └──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and failure reasons
pub mod error;

/// Parameter values and response formats
pub mod types;

/// Client configuration
pub mod config;

/// Endpoint registry
pub mod registry;

/// Parameter validation
pub mod validate;

/// HTTP transport
pub mod http;

/// Response decoders (JSON, XML, VDF)
pub mod decode;

/// Request dispatch and endpoint methods
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{RequestContext, SteamClient};
pub use config::ClientConfig;
pub use decode::ApiResponse;
pub use error::{Error, Result};
pub use types::{ParamValue, Relationship, RequestParameters, ResponseFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
