//! Decoder implementations
//!
//! Each decoder handles a specific response format.

use super::types::{ApiResponse, ResponseDecoder, XmlDocument};
use crate::error::{Error, Result};
use crate::types::ResponseFormat;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Decoder for a response format
pub fn decoder_for(format: ResponseFormat) -> &'static dyn ResponseDecoder {
    static JSON: JsonDecoder = JsonDecoder;
    static XML: XmlDecoder = XmlDecoder;
    static TEXT: TextDecoder = TextDecoder;

    match format {
        ResponseFormat::Json => &JSON,
        ResponseFormat::Xml => &XML,
        ResponseFormat::Vdf => &TEXT,
    }
}

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl ResponseDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<ApiResponse> {
        serde_json::from_str(body)
            .map(ApiResponse::Json)
            .map_err(|e| Error::Decode {
                message: format!("Failed to parse JSON: {e}"),
            })
    }
}

// ============================================================================
// Text Decoder
// ============================================================================

/// Pass-through decoder for formats the client does not parse (VDF)
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl ResponseDecoder for TextDecoder {
    fn decode(&self, body: &str) -> Result<ApiResponse> {
        Ok(ApiResponse::Text(body.to_string()))
    }
}

// ============================================================================
// XML Decoder
// ============================================================================

/// XML decoder producing an [`XmlDocument`]
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl ResponseDecoder for XmlDecoder {
    fn decode(&self, body: &str) -> Result<ApiResponse> {
        xml_to_document(body).map(ApiResponse::Xml)
    }
}

/// Deepest element nesting accepted in a response
pub const MAX_XML_DEPTH: usize = 256;

/// An element whose closing tag has not been read yet
struct OpenElement {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl OpenElement {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn finish(self) -> (String, Value) {
        if !self.children.is_empty() {
            return (self.name, Value::Object(self.children));
        }
        let text = self.text.trim();
        if text.is_empty() {
            (self.name, Value::Null)
        } else {
            (self.name, parse_text_value(text))
        }
    }
}

/// Parse an XML document into its root name and a JSON tree.
///
/// Open elements are kept on an explicit stack, bounded by
/// [`MAX_XML_DEPTH`]. Attributes, comments, declarations and doctypes are
/// skipped.
fn xml_to_document(xml: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<OpenElement> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::xml(format!("{e} at byte {}", reader.error_position())))?;

        match event {
            Event::Start(e) => {
                let name = element_name(&e);
                if open.is_empty() && root.is_some() {
                    return Err(Error::xml(format!("Unexpected element '{name}' after root")));
                }
                if open.len() >= MAX_XML_DEPTH {
                    return Err(Error::xml(format!(
                        "Elements nested deeper than {MAX_XML_DEPTH} levels"
                    )));
                }
                open.push(OpenElement::new(name));
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                close_element(&mut open, &mut root, name, Value::Null)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| Error::xml("Closing tag without an open element"))?;
                let (name, value) = element.finish();
                close_element(&mut open, &mut root, name, value)?;
            }
            Event::Text(e) => {
                let text = e.xml_content().map_err(|e| Error::xml(e.to_string()))?;
                push_text(&mut open, &text)?;
            }
            Event::CData(e) => {
                push_text(&mut open, &String::from_utf8_lossy(&e))?;
            }
            Event::GeneralRef(e) => {
                push_text(&mut open, &resolve_reference(&e)?)?;
            }
            Event::Eof => break,
            // Declarations, processing instructions, comments, doctypes
            _ => {}
        }
    }

    if let Some(element) = open.last() {
        return Err(Error::xml(format!(
            "Missing closing tag for {}",
            element.name
        )));
    }

    let (root, body) = root.ok_or_else(|| Error::xml("Input does not appear to be XML"))?;
    Ok(XmlDocument { root, body })
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Attach a finished element to its parent, or make it the root
fn close_element(
    open: &mut [OpenElement],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
) -> Result<()> {
    match open.last_mut() {
        Some(parent) => insert_child(&mut parent.children, name, value),
        None if root.is_some() => {
            return Err(Error::xml(format!("Unexpected element '{name}' after root")));
        }
        None => *root = Some((name, value)),
    }
    Ok(())
}

fn push_text(open: &mut [OpenElement], text: &str) -> Result<()> {
    match open.last_mut() {
        Some(element) => element.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(Error::xml("Text outside the root element")),
    }
    Ok(())
}

/// Resolve a character reference or one of the predefined entities
fn resolve_reference(r: &BytesRef<'_>) -> Result<String> {
    if let Some(c) = r.resolve_char_ref().map_err(|e| Error::xml(e.to_string()))? {
        return Ok(c.to_string());
    }
    let name = r.decode().map_err(|e| Error::xml(e.to_string()))?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| Error::xml(format!("Unknown entity &{name};")))
}

/// Add a child, turning repeated element names into arrays
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(arr)) => arr.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

/// Parse leaf text into a JSON scalar.
///
/// Numbers are only converted when they print back identically, so IDs
/// with leading zeros stay strings.
fn parse_text_value(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        if n.to_string() == text {
            return Value::Number(n.into());
        }
    }

    if let Ok(n) = text.parse::<f64>() {
        if let Some(num) = serde_json::Number::from_f64(n) {
            if num.to_string() == text {
                return Value::Number(num);
            }
        }
    }

    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}
