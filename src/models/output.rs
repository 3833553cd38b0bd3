//! Output models used for printing, CSV export and JSON serialization.
//!
//! Serialized column names are the plain-string headers written to the
//! tabular files, so renaming a field here changes the file format.

use serde::{Deserialize, Serialize};

use crate::cli::types::{LeagueId, TeamId};

/// A competition as listed by `GET /leagues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
}

/// One row of the team table.
///
/// `league` is the label the caller queried under, not re-derived from the
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "Team ID")]
    pub team_id: TeamId,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "League")]
    pub league: String,
}

/// One player's metrics in one competition for one season.
///
/// Profile columns repeat on every row for the same player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatLine {
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Nationality")]
    pub nationality: Option<String>,
    #[serde(rename = "Weight")]
    pub weight: Option<String>,
    #[serde(rename = "Height")]
    pub height: Option<String>,
    #[serde(rename = "League")]
    pub league: Option<String>,
    #[serde(rename = "Team")]
    pub team: Option<String>,
    #[serde(rename = "Appearances")]
    pub appearances: Option<u32>,
    #[serde(rename = "Lineups")]
    pub lineups: Option<u32>,
    #[serde(rename = "Minutes")]
    pub minutes: Option<u32>,
    #[serde(rename = "Goals")]
    pub goals: Option<u32>,
    #[serde(rename = "Assists")]
    pub assists: Option<u32>,
    #[serde(rename = "Yellow Cards")]
    pub yellow_cards: Option<u32>,
    #[serde(rename = "Red Cards")]
    pub red_cards: Option<u32>,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Passes Total")]
    pub passes_total: Option<u32>,
    #[serde(rename = "Tackles Total")]
    pub tackles_total: Option<u32>,
    #[serde(rename = "Duels Total")]
    pub duels_total: Option<u32>,
}
