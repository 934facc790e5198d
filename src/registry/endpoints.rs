//! The endpoint table

use super::types::{EndpointSpec, ParamSpec};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::ParamKind::{
    AppIdFilter, Flag, NameList, NonNegativeInteger, Relationship, SteamId, SteamIdList,
};

const ISTEAM_NEWS: &str = "ISteamNews/";
const ISTEAM_USER: &str = "ISteamUser/";
const ISTEAM_USER_STATS: &str = "ISteamUserStats/";
const IPLAYER_SERVICE: &str = "IPlayerService/";

const V1: &str = "v0001/";
const V2: &str = "v0002/";

/// Every supported endpoint
pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec {
        name: "GetNewsForApp",
        category: ISTEAM_NEWS,
        version: V2,
        requires_key: false,
        parameters: &[
            ParamSpec::required("appid", NonNegativeInteger),
            ParamSpec::required("count", NonNegativeInteger),
            ParamSpec::required("maxLength", NonNegativeInteger),
        ],
    },
    EndpointSpec {
        name: "GetGlobalAchievementPercentagesForApp",
        category: ISTEAM_USER_STATS,
        version: V2,
        requires_key: false,
        parameters: &[ParamSpec::required("gameid", NonNegativeInteger)],
    },
    EndpointSpec {
        name: "GetGlobalStatsForGame",
        category: ISTEAM_USER_STATS,
        version: V1,
        requires_key: false,
        parameters: &[
            ParamSpec::required("gameid", NonNegativeInteger),
            ParamSpec::required("count", NonNegativeInteger),
            ParamSpec::required("name", NameList),
        ],
    },
    EndpointSpec {
        name: "GetPlayerSummaries",
        category: ISTEAM_USER,
        version: V2,
        requires_key: true,
        parameters: &[ParamSpec::required("steamids", SteamIdList)],
    },
    EndpointSpec {
        name: "GetFriendList",
        category: ISTEAM_USER,
        version: V1,
        requires_key: true,
        parameters: &[
            ParamSpec::required("steamid", SteamId),
            ParamSpec::required("relationship", Relationship),
        ],
    },
    EndpointSpec {
        name: "GetPlayerAchievements",
        category: ISTEAM_USER_STATS,
        version: V1,
        requires_key: true,
        parameters: &[
            ParamSpec::required("steamid", SteamId),
            ParamSpec::required("appid", NonNegativeInteger),
        ],
    },
    EndpointSpec {
        name: "GetUserStatsForGame",
        category: ISTEAM_USER_STATS,
        version: V2,
        requires_key: true,
        parameters: &[
            ParamSpec::required("steamid", SteamId),
            ParamSpec::required("appid", NonNegativeInteger),
        ],
    },
    EndpointSpec {
        name: "GetOwnedGames",
        category: IPLAYER_SERVICE,
        version: V1,
        requires_key: true,
        parameters: &[
            ParamSpec::required("steamid", SteamId),
            ParamSpec::optional("include_appinfo", Flag),
            ParamSpec::optional("include_played_free_games", Flag),
            ParamSpec::optional("appids_filter", AppIdFilter),
        ],
    },
    EndpointSpec {
        name: "GetRecentlyPlayedGames",
        category: IPLAYER_SERVICE,
        version: V1,
        requires_key: true,
        parameters: &[
            ParamSpec::required("steamid", SteamId),
            ParamSpec::optional("count", NonNegativeInteger),
        ],
    },
    EndpointSpec {
        name: "IsPlayingSharedGame",
        category: IPLAYER_SERVICE,
        version: V1,
        requires_key: true,
        parameters: &[
            ParamSpec::required("steamid", SteamId),
            ParamSpec::required("appid_playing", NonNegativeInteger),
        ],
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static EndpointSpec>> =
    Lazy::new(|| ENDPOINTS.iter().map(|e| (e.name, e)).collect());

/// Look up an endpoint by its exact method name
pub fn lookup(method: &str) -> Option<&'static EndpointSpec> {
    INDEX.get(method).copied()
}

/// Iterate over every endpoint in table order
pub fn all() -> impl Iterator<Item = &'static EndpointSpec> {
    ENDPOINTS.iter()
}
