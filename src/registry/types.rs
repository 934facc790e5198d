//! Registry types
//!
//! Endpoint and parameter contracts, plus the tagged rule attached to each
//! parameter.

/// Validation rule for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Integer ≥ 0 (`appid`, `count`, `maxLength`, ...)
    NonNegativeInteger,
    /// List of achievement names
    NameList,
    /// Comma-separated list of at most 100 Steam IDs
    SteamIdList,
    /// A single 64-bit Steam ID, 17 digits
    SteamId,
    /// One of the friend relationship filters
    Relationship,
    /// List of app IDs, sent as `input_json`
    AppIdFilter,
    /// Boolean flag (`true`/`false`, `1`/`0`)
    Flag,
    /// Passed through without checks
    Unchecked,
}

impl ParamKind {
    /// Infer the rule from a parameter name, case-insensitively.
    ///
    /// Used for parameters an endpoint does not declare, and by the
    /// endpoint-agnostic [`validate`](crate::validate::validate).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "count" | "maxlength" | "appid" | "appid_playing" | "gameid" => {
                ParamKind::NonNegativeInteger
            }
            "name" => ParamKind::NameList,
            "steamids" => ParamKind::SteamIdList,
            "steamid" => ParamKind::SteamId,
            "relationship" => ParamKind::Relationship,
            "appids_filter" => ParamKind::AppIdFilter,
            "include_appinfo" | "include_played_free_games" => ParamKind::Flag,
            _ => ParamKind::Unchecked,
        }
    }
}

/// One accepted parameter of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Name as sent in the query string
    pub name: &'static str,
    /// Whether the call is rejected when it is absent
    pub required: bool,
    /// Validation rule
    pub kind: ParamKind,
}

impl ParamSpec {
    /// A required parameter
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    /// An optional parameter
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// Contract for one remote method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Method name, also the registry key
    pub name: &'static str,
    /// Interface path segment, with trailing slash (`ISteamUser/`)
    pub category: &'static str,
    /// Version path segment, with trailing slash (`v0002/`)
    pub version: &'static str,
    /// Whether the `key` query parameter is injected
    pub requires_key: bool,
    /// Accepted parameters, in query-string order
    pub parameters: &'static [ParamSpec],
}

impl EndpointSpec {
    /// Find a declared parameter by exact name
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Rule for a parameter: the declared kind, or the name-inferred kind
    /// for parameters this endpoint does not declare
    pub fn kind_for(&self, name: &str) -> ParamKind {
        self.param(name)
            .map_or_else(|| ParamKind::from_name(name), |p| p.kind)
    }

    /// Required parameters, in declaration order
    pub fn required_params(&self) -> impl Iterator<Item = &'static ParamSpec> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// Path relative to the base URL: `{category}{name}/{version}`
    pub fn path(&self) -> String {
        format!("{}{}/{}", self.category, self.name, self.version)
    }
}
