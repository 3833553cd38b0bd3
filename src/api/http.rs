//! HTTP access to API-Football.
//!
//! [`ApiClient`] is the only type that talks to the network. It attaches the
//! RapidAPI header pair to every request, turns non-2xx statuses into
//! [`FootballError::Status`] without reading the body, and decodes successful
//! bodies into typed envelopes. Errors reported inside the envelope become
//! [`FootballError::Upstream`] even when the status is 200.

use std::fmt;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::api::types::{Envelope, LeagueEntry, PlayerEntry, TeamEntry};
use crate::cli::types::{LeagueId, PlayerId, Season, TeamId};
use crate::config::{ClientConfig, RAPIDAPI_HOST};
use crate::error::{FootballError, Result};


const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";
const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

/// The upstream endpoints this client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Leagues,
    Teams,
    Players,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Leagues => "leagues",
            Endpoint::Teams => "teams",
            Endpoint::Players => "players",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Build the default headers sent with every request.
pub fn rapidapi_headers(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        HeaderName::from_static(RAPIDAPI_HOST_HEADER),
        HeaderValue::from_static(RAPIDAPI_HOST),
    );
    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    h.insert(HeaderName::from_static(RAPIDAPI_KEY_HEADER), key);
    Ok(h)
}

/// Thin client over the three API-Football endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("football-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(rapidapi_headers(config.api_key())?)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// GET `{base}/{endpoint}` with `params` and decode the envelope.
    pub async fn get<T>(&self, endpoint: Endpoint, params: &[(&str, String)]) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        debug!(%url, ?params, "GET");

        let res = self.http.get(&url).query(params).send().await?;

        let status = res.status();
        if !status.is_success() {
            error!(%endpoint, %status, "request failed");
            return Err(FootballError::Status { endpoint, status });
        }

        let body = res.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)
            .map_err(|source| FootballError::MalformedResponse { endpoint, source })?;

        let messages = envelope.error_messages();
        if !messages.is_empty() {
            warn!(%endpoint, "upstream reported: {}", messages.join("; "));
            return Err(FootballError::Upstream { endpoint, messages });
        }

        Ok(envelope)
    }

    /// `GET /leagues` without filters.
    pub async fn fetch_leagues(&self) -> Result<Vec<LeagueEntry>> {
        Ok(self.get(Endpoint::Leagues, &[]).await?.response)
    }

    /// `GET /teams?league=..&season=..`
    pub async fn fetch_teams(&self, league_id: LeagueId, season: Season) -> Result<Vec<TeamEntry>> {
        let params = [
            ("league", league_id.to_string()),
            ("season", season.to_string()),
        ];
        Ok(self.get(Endpoint::Teams, &params).await?.response)
    }

    /// `GET /players?search=..&team=..&season=..` (free-text mode).
    pub async fn search_players(
        &self,
        team_id: TeamId,
        player_name: &str,
        season: Season,
    ) -> Result<Vec<PlayerEntry>> {
        let params = [
            ("search", player_name.to_string()),
            ("team", team_id.to_string()),
            ("season", season.to_string()),
        ];
        Ok(self.get(Endpoint::Players, &params).await?.response)
    }

    /// `GET /players?id=..&team=..&season=..` (direct-id mode).
    pub async fn fetch_player(
        &self,
        player_id: PlayerId,
        team_id: TeamId,
        season: Season,
    ) -> Result<Vec<PlayerEntry>> {
        let params = [
            ("id", player_id.to_string()),
            ("team", team_id.to_string()),
            ("season", season.to_string()),
        ];
        Ok(self.get(Endpoint::Players, &params).await?.response)
    }
}
