//! One method per supported endpoint
//!
//! Each method builds the parameter set from its arguments and forwards to
//! [`SteamClient::send`]. Optional arguments are only added when `Some`.

use super::dispatcher::SteamClient;
use crate::decode::ApiResponse;
use crate::error::Result;
use crate::types::{ParamValue, RequestParameters};

impl SteamClient {
    /// Latest news items for an app.
    ///
    /// `max_length` truncates each news entry's contents.
    pub async fn get_news_for_app(
        &self,
        appid: impl Into<ParamValue>,
        count: impl Into<ParamValue>,
        max_length: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new()
            .with("appid", appid)
            .with("count", count)
            .with("maxLength", max_length);
        self.send("GetNewsForApp", params).await
    }

    /// Global achievement unlock percentages for a game
    pub async fn get_global_achievement_percentages_for_app(
        &self,
        gameid: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new().with("gameid", gameid);
        self.send("GetGlobalAchievementPercentagesForApp", params)
            .await
    }

    /// Global stats for the named achievements of a game.
    ///
    /// `count` is the number of names being passed.
    pub async fn get_global_stats_for_game(
        &self,
        gameid: impl Into<ParamValue>,
        count: impl Into<ParamValue>,
        names: &[&str],
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new()
            .with("gameid", gameid)
            .with("count", count)
            .with("name", names);
        self.send("GetGlobalStatsForGame", params).await
    }

    /// Profile summaries for up to 100 Steam IDs, given as a
    /// comma-separated string or a list
    pub async fn get_player_summaries(
        &self,
        steamids: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new().with("steamids", steamids);
        self.send("GetPlayerSummaries", params).await
    }

    /// Friend list of a user with a public profile
    pub async fn get_friend_list(
        &self,
        steamid: impl Into<ParamValue>,
        relationship: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new()
            .with("steamid", steamid)
            .with("relationship", relationship);
        self.send("GetFriendList", params).await
    }

    /// Achievements of a user for one app
    pub async fn get_player_achievements(
        &self,
        steamid: impl Into<ParamValue>,
        appid: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new()
            .with("steamid", steamid)
            .with("appid", appid);
        self.send("GetPlayerAchievements", params).await
    }

    /// Stats of a user for one app
    pub async fn get_user_stats_for_game(
        &self,
        steamid: impl Into<ParamValue>,
        appid: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new()
            .with("steamid", steamid)
            .with("appid", appid);
        self.send("GetUserStatsForGame", params).await
    }

    /// Games owned by a user, optionally with app info, played free games,
    /// or restricted to a set of app IDs
    pub async fn get_owned_games(
        &self,
        steamid: impl Into<ParamValue>,
        include_appinfo: Option<bool>,
        include_played_free_games: Option<bool>,
        appids_filter: Option<&[u32]>,
    ) -> Result<ApiResponse> {
        let mut params = RequestParameters::new().with("steamid", steamid);
        params.insert_opt("include_appinfo", include_appinfo);
        params.insert_opt("include_played_free_games", include_played_free_games);
        params.insert_opt("appids_filter", appids_filter);
        self.send("GetOwnedGames", params).await
    }

    /// Games a user played in the last two weeks
    pub async fn get_recently_played_games(
        &self,
        steamid: impl Into<ParamValue>,
        count: Option<u32>,
    ) -> Result<ApiResponse> {
        let mut params = RequestParameters::new().with("steamid", steamid);
        params.insert_opt("count", count);
        self.send("GetRecentlyPlayedGames", params).await
    }

    /// Owner of a borrowed game the user is currently playing, or 0
    pub async fn is_playing_shared_game(
        &self,
        steamid: impl Into<ParamValue>,
        appid_playing: impl Into<ParamValue>,
    ) -> Result<ApiResponse> {
        let params = RequestParameters::new()
            .with("steamid", steamid)
            .with("appid_playing", appid_playing);
        self.send("IsPlayingSharedGame", params).await
    }
}
