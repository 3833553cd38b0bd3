//! Schema of the API-Football v3 JSON payloads.
//!
//! Identity fields (`league.id`, `team.name`, `player.id`, ...) are required:
//! a payload without them fails to deserialize and surfaces as a malformed
//! response. Per-competition metrics are routinely `null` upstream, so every
//! metric is optional and a missing block deserializes to its default.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cli::types::{LeagueId, PlayerId, TeamId};


/// Ratings come back as decimal strings (`"7.066666"`), occasionally as
/// plain numbers, and as `null` when the player did not feature. Text that
/// is not a number (`"N/A"`, `"-"`) is an unset rating.
fn de_opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => Ok(s.trim().parse::<f64>().ok()),
    }
}

/// Top-level envelope shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub response: Vec<T>,
    /// Upstream reports request problems here (an array when empty, an
    /// object keyed by field otherwise), often alongside a 200 status.
    #[serde(default)]
    pub errors: Value,
}

impl<T> Envelope<T> {
    /// Upstream error messages, if the envelope carried any.
    pub fn error_messages(&self) -> Vec<String> {
        match &self.errors {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| match v.as_str() {
                    Some(s) => format!("{k}: {s}"),
                    None => format!("{k}: {v}"),
                })
                .collect(),
            Value::Array(items) => items.iter().map(|v| v.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

/// One entry of `GET /leagues`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntry {
    pub league: LeagueInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInfo {
    pub id: LeagueId,
    pub name: String,
}

/// One entry of `GET /teams`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub team: TeamInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    pub id: TeamId,
    pub name: String,
}

/// One entry of `GET /players`, in both search and by-id mode.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub player: PlayerProfile,
    #[serde(default)]
    pub statistics: Vec<StatisticsEntry>,
}

/// Player identity and physical profile. Units are kept as sent
/// (`"180 cm"`, `"72 kg"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    pub age: Option<u32>,
    pub nationality: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
}

/// Per-competition statistics block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatisticsEntry {
    pub team: Option<NamedRef>,
    pub league: Option<NamedRef>,
    pub games: Option<Games>,
    pub goals: Option<Goals>,
    pub cards: Option<Cards>,
    pub passes: Option<Totals>,
    pub tackles: Option<Totals>,
    pub duels: Option<Totals>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Games {
    /// Spelled `appearences` by the upstream.
    #[serde(alias = "appearences")]
    pub appearances: Option<u32>,
    pub lineups: Option<u32>,
    pub minutes: Option<u32>,
    #[serde(deserialize_with = "de_opt_decimal")]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub total: Option<u32>,
    pub assists: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Cards {
    pub yellow: Option<u32>,
    pub red: Option<u32>,
}

/// Blocks where only the `total` counter is exported (passes, tackles, duels).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub total: Option<u32>,
}
