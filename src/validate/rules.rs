//! Per-kind validation rules

use crate::error::{Error, Result};
use crate::registry::ParamKind;
use crate::types::{ParamValue, Relationship};

/// Parameter that carries JSON-encoded service-call arguments
pub const INPUT_JSON: &str = "input_json";

/// Maximum number of IDs in one `steamids` list
pub const MAX_STEAM_IDS: usize = 100;

/// Number of decimal digits in a 64-bit Steam ID
pub const STEAM_ID_LENGTH: usize = 17;

/// Check one parameter value against its rule
pub fn check(kind: ParamKind, name: &str, value: &ParamValue) -> Result<()> {
    match kind {
        ParamKind::NonNegativeInteger => {
            if value.as_non_negative().is_none() {
                return Err(Error::invalid_param(
                    name,
                    format!("expected a non-negative integer, got '{value}'"),
                ));
            }
        }
        ParamKind::NameList => {
            if value.as_list().is_none() {
                return Err(Error::invalid_param(name, "expected a list of names"));
            }
        }
        ParamKind::SteamIdList => check_steam_id_list(name, value)?,
        ParamKind::SteamId => {
            if !is_steam_id(value) {
                return Err(Error::invalid_param(
                    name,
                    format!("'{value}' is not a {STEAM_ID_LENGTH}-digit Steam ID"),
                ));
            }
        }
        ParamKind::Relationship => {
            let parsed = value.as_text().map(str::parse::<Relationship>);
            if !matches!(parsed, Some(Ok(_))) {
                return Err(Error::invalid_param(
                    name,
                    format!(
                        "'{value}' is not one of {}",
                        Relationship::VALUES.join(", ")
                    ),
                ));
            }
        }
        ParamKind::AppIdFilter => {
            app_ids(name, value)?;
        }
        ParamKind::Flag => {
            let valid = match value {
                ParamValue::Boolean(_) => true,
                ParamValue::Integer(n) => matches!(n, 0 | 1),
                ParamValue::Text(s) => matches!(s.as_str(), "0" | "1" | "true" | "false"),
                ParamValue::List(_) => false,
            };
            if !valid {
                return Err(Error::invalid_param(
                    name,
                    format!("expected a boolean flag, got '{value}'"),
                ));
            }
        }
        ParamKind::Unchecked => {}
    }

    Ok(())
}

/// Whether a value is a 17-digit Steam ID
pub fn is_steam_id(value: &ParamValue) -> bool {
    match value {
        ParamValue::Text(s) => is_steam_id_str(s),
        ParamValue::Integer(n) => *n >= 0 && is_steam_id_str(&n.to_string()),
        _ => false,
    }
}

fn is_steam_id_str(s: &str) -> bool {
    s.len() == STEAM_ID_LENGTH && s.bytes().all(|b| b.is_ascii_digit())
}

fn check_steam_id_list(name: &str, value: &ParamValue) -> Result<()> {
    let ids: Vec<ParamValue> = match value {
        ParamValue::Text(s) => s.split(',').map(ParamValue::from).collect(),
        ParamValue::List(items) => items.clone(),
        ParamValue::Integer(_) => vec![value.clone()],
        ParamValue::Boolean(_) => {
            return Err(Error::invalid_param(name, "expected a list of Steam IDs"));
        }
    };

    if ids.len() > MAX_STEAM_IDS {
        return Err(Error::invalid_param(
            name,
            format!("at most {MAX_STEAM_IDS} Steam IDs per request, got {}", ids.len()),
        ));
    }

    if let Some(bad) = ids.iter().find(|id| !is_steam_id(id)) {
        return Err(Error::invalid_param(
            name,
            format!("'{bad}' is not a {STEAM_ID_LENGTH}-digit Steam ID"),
        ));
    }

    Ok(())
}

fn app_ids(name: &str, value: &ParamValue) -> Result<Vec<u64>> {
    let items = value
        .as_list()
        .ok_or_else(|| Error::invalid_param(name, "expected a list of app ids"))?;

    items
        .iter()
        .map(|item| {
            item.as_non_negative().ok_or_else(|| {
                Error::invalid_param(name, format!("'{item}' is not a valid app id"))
            })
        })
        .collect()
}

/// Encode an app id list as the percent-encoded JSON array sent in
/// `input_json`
pub fn encode_input_json(name: &str, value: &ParamValue) -> Result<String> {
    let ids = app_ids(name, value)?;
    let json = serde_json::to_string(&ids)?;
    Ok(url::form_urlencoded::byte_serialize(json.as_bytes()).collect())
}
