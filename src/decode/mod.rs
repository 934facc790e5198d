//! Response decoder module
//!
//! Supports: JSON, XML, raw text (VDF)
//!
//! # Overview
//!
//! A successful response body is decoded according to the client's
//! [`ResponseFormat`](crate::types::ResponseFormat). Parse failures surface
//! as decode errors instead of panicking or being passed along half-read.

mod decoders;
mod types;

pub use decoders::{decoder_for, JsonDecoder, TextDecoder, XmlDecoder, MAX_XML_DEPTH};
pub use types::{ApiResponse, ResponseDecoder, XmlDocument};

#[cfg(test)]
mod tests;
