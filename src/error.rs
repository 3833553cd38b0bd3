//! Error types for the football stats client

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::Endpoint;
use crate::cli::types::{PlayerId, TeamId};

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FootballError>;

#[derive(Error, Debug)]
pub enum FootballError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided: set the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("{endpoint} request failed with status {status}")]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
    },

    #[error("Malformed {endpoint} response: {source}")]
    MalformedResponse {
        endpoint: Endpoint,
        source: serde_json::Error,
    },

    #[error("{endpoint} request rejected upstream: {}", .messages.join("; "))]
    Upstream {
        endpoint: Endpoint,
        messages: Vec<String>,
    },

    #[error("No player found with name '{name}' in team {team_id}")]
    PlayerNotFound { name: String, team_id: TeamId },

    #[error("No stats found for player {player_id} in team {team_id}")]
    NoStats { player_id: PlayerId, team_id: TeamId },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Nothing to aggregate: none of the {leagues} leagues returned enough teams")]
    NothingToAggregate { leagues: usize },
}
