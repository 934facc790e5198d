//! Decoder types and traits
//!
//! Defines the decoded response value and the decoder abstraction.

use crate::error::{Error, Result};
use crate::types::ResponseFormat;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A parsed XML document
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    /// Name of the root element (`response` for Steam)
    pub root: String,
    /// Root element content as a JSON tree. Repeated child elements become
    /// arrays, leaf text becomes a scalar.
    pub body: Value,
}

/// A decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Structured JSON value
    Json(Value),
    /// Parsed XML document
    Xml(XmlDocument),
    /// Raw text, as returned for VDF
    Text(String),
}

impl ApiResponse {
    /// Format the body was decoded as
    pub fn format(&self) -> ResponseFormat {
        match self {
            ApiResponse::Json(_) => ResponseFormat::Json,
            ApiResponse::Xml(_) => ResponseFormat::Xml,
            ApiResponse::Text(_) => ResponseFormat::Vdf,
        }
    }

    /// Borrow the JSON value
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the XML document
    pub fn as_xml(&self) -> Option<&XmlDocument> {
        match self {
            ApiResponse::Xml(doc) => Some(doc),
            _ => None,
        }
    }

    /// Borrow the raw text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Deserialize a JSON response into a typed value
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self
            .as_json()
            .ok_or_else(|| Error::decode(format!("expected a JSON response, got {}", self.format())))?;
        Ok(T::deserialize(value)?)
    }
}

/// Trait for decoding response bodies
pub trait ResponseDecoder: Send + Sync {
    /// Decode a successful response body
    fn decode(&self, body: &str) -> Result<ApiResponse>;
}
