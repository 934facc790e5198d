//! Tests for decoder module

use super::*;
use crate::error::Error;
use crate::types::ResponseFormat;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

// ============================================================================
// Decoder Selection
// ============================================================================

#[test]
fn test_decoder_for_format() {
    let body = r#"{"response": {}}"#;
    assert_eq!(
        decoder_for(ResponseFormat::Json).decode(body).unwrap().format(),
        ResponseFormat::Json
    );
    assert_eq!(
        decoder_for(ResponseFormat::Vdf).decode(body).unwrap(),
        ApiResponse::Text(body.to_string())
    );
}

// ============================================================================
// JSON Decoder Tests
// ============================================================================

#[test]
fn test_json_decoder_object() {
    let response = JsonDecoder
        .decode(r#"{"appnews": {"appid": 440, "newsitems": []}}"#)
        .unwrap();
    let value = response.as_json().unwrap();
    assert_eq!(value["appnews"]["appid"], 440);
}

#[test]
fn test_json_decoder_invalid() {
    let err = JsonDecoder.decode("<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.reason(), "Response could not be decoded");
}

#[test]
fn test_json_deserialize_typed() {
    #[derive(Debug, Deserialize)]
    struct Envelope {
        response: Inner,
    }
    #[derive(Debug, Deserialize)]
    struct Inner {
        lender_steamid: String,
    }

    let response = JsonDecoder
        .decode(r#"{"response": {"lender_steamid": "0"}}"#)
        .unwrap();
    let envelope: Envelope = response.deserialize().unwrap();
    assert_eq!(envelope.response.lender_steamid, "0");

    let text = ApiResponse::Text("x".into());
    assert!(matches!(
        text.deserialize::<Envelope>().unwrap_err(),
        Error::Decode { .. }
    ));
}

// ============================================================================
// Text Decoder Tests
// ============================================================================

#[test]
fn test_text_decoder_passes_through() {
    let vdf = "\"response\"\n{\n\t\"player_count\"\t\"42\"\n}\n";
    let response = TextDecoder.decode(vdf).unwrap();
    assert_eq!(response.as_text(), Some(vdf));
    assert!(response.as_json().is_none());
}

// ============================================================================
// XML Decoder Tests
// ============================================================================

#[test]
fn test_xml_decoder_steam_document() {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE response>
<response>
	<lender_steamid>0</lender_steamid>
</response>"#;

    let response = XmlDecoder.decode(body).unwrap();
    let doc = response.as_xml().unwrap();
    assert_eq!(doc.root, "response");
    assert_eq!(doc.body, json!({"lender_steamid": 0}));
}

#[test]
fn test_xml_decoder_repeated_elements_become_arrays() {
    let body = r#"<friendslist>
  <friends>
    <friend><steamid>76561197960265731</steamid><relationship>friend</relationship></friend>
    <friend><steamid>76561197960265738</steamid><relationship>friend</relationship></friend>
  </friends>
</friendslist>"#;

    let doc = XmlDecoder.decode(body).unwrap().as_xml().cloned().unwrap();
    let friends = doc.body["friends"]["friend"].as_array().unwrap();
    assert_eq!(friends.len(), 2);
    assert_eq!(friends[1]["relationship"], "friend");
}

#[test]
fn test_xml_decoder_entities_and_cdata() {
    let body = "<news><title>Tom &amp; Jerry &#x263A;</title><contents><![CDATA[<b>bold</b>]]></contents></news>";
    let doc = XmlDecoder.decode(body).unwrap().as_xml().cloned().unwrap();
    assert_eq!(doc.body["title"], "Tom & Jerry \u{263A}");
    assert_eq!(doc.body["contents"], "<b>bold</b>");
}

#[test]
fn test_xml_decoder_attributes_comments_and_empty() {
    let body = r#"<game id="440" name="a &amp; b"><!-- note --><empty/><blank></blank><gameName>TF2</gameName></game>"#;
    let doc = XmlDecoder.decode(body).unwrap().as_xml().cloned().unwrap();
    assert_eq!(doc.root, "game");
    assert_eq!(
        doc.body,
        json!({"empty": null, "blank": null, "gameName": "TF2"})
    );
}

#[test]
fn test_xml_decoder_keeps_leading_zero_ids() {
    let doc = XmlDecoder
        .decode("<r><code>007</code><ratio>0.5</ratio><on>true</on></r>")
        .unwrap()
        .as_xml()
        .cloned()
        .unwrap();
    assert_eq!(doc.body, json!({"code": "007", "ratio": 0.5, "on": true}));
}

#[test]
fn test_xml_decoder_rejects_deep_nesting() {
    let depth = 200_000;
    let body = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
    let err = XmlDecoder.decode(&body).unwrap_err();
    assert!(matches!(err, Error::XmlParse { .. }));
}

#[test]
fn test_xml_decoder_nesting_at_limit() {
    let body = format!(
        "{}7{}",
        "<a>".repeat(MAX_XML_DEPTH),
        "</a>".repeat(MAX_XML_DEPTH)
    );
    let doc = XmlDecoder.decode(&body).unwrap().as_xml().cloned().unwrap();
    assert_eq!(doc.root, "a");

    let mut value = &doc.body;
    for _ in 1..MAX_XML_DEPTH {
        value = &value["a"];
    }
    assert_eq!(*value, json!(7));
}

#[test]
fn test_xml_decoder_errors() {
    for body in [
        "not xml",
        "<response><a>1</a>",
        "<response><a>1</b></response>",
        "<response>&bogus;</response>",
        "<a></a><b></b>",
    ] {
        let err = XmlDecoder.decode(body).unwrap_err();
        assert!(
            matches!(err, Error::XmlParse { .. }),
            "expected XmlParse for {body:?}, got {err:?}"
        );
    }
}
