//! Parameter validation
//!
//! Applies each parameter's [`ParamKind`](crate::registry::ParamKind) rule
//! to a [`RequestParameters`](crate::types::RequestParameters) set.
//!
//! # Overview
//!
//! Validation is a single, order-independent pass. The first violation is
//! returned as [`Error::ParametersInvalid`](crate::error::Error). On
//! success, list-valued `appids_filter` parameters are rewritten into the
//! percent-encoded `input_json` parameter that Steam service interfaces
//! expect. A failed pass leaves the parameter set untouched.

mod rules;

pub use rules::{check, encode_input_json, is_steam_id, INPUT_JSON, MAX_STEAM_IDS, STEAM_ID_LENGTH};

use crate::error::Result;
use crate::registry::{EndpointSpec, ParamKind};
use crate::types::RequestParameters;
use tracing::debug;

/// Validate parameters using rules inferred from their names
pub fn validate(params: &mut RequestParameters) -> Result<()> {
    validate_with(params, ParamKind::from_name)
}

/// Validate parameters against an endpoint's declared rules.
///
/// Parameters the endpoint does not declare fall back to the name-inferred
/// rule.
pub fn validate_for(endpoint: &EndpointSpec, params: &mut RequestParameters) -> Result<()> {
    validate_with(params, |name| endpoint.kind_for(name))
}

fn validate_with<F>(params: &mut RequestParameters, kind_for: F) -> Result<()>
where
    F: Fn(&str) -> ParamKind,
{
    let mut rewrites = Vec::new();

    for (name, value) in params.iter() {
        let kind = kind_for(name);
        check(kind, name, value)?;

        if kind == ParamKind::AppIdFilter {
            rewrites.push((name.to_string(), encode_input_json(name, value)?));
        }
    }

    for (name, encoded) in rewrites {
        debug!(parameter = %name, "Rewriting app id filter as {INPUT_JSON}");
        params.remove(&name);
        params.insert(INPUT_JSON, encoded);
    }

    Ok(())
}
