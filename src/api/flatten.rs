//! Flattening of nested player payloads into stat-line rows.

use crate::api::types::{PlayerEntry, PlayerProfile, StatisticsEntry};
use crate::models::PlayerStatLine;


/// Flatten a `GET /players?id=..` response into one row per competition.
///
/// Only the first entry is used: a by-id query returns a single player.
/// An empty response, or a player without statistics, yields no rows.
pub fn flatten_statistics(response: &[PlayerEntry]) -> Vec<PlayerStatLine> {
    let Some(entry) = response.first() else {
        return Vec::new();
    };

    entry
        .statistics
        .iter()
        .map(|stat| stat_line(&entry.player, stat))
        .collect()
}

/// Combine the player's profile with one competition's metrics.
fn stat_line(profile: &PlayerProfile, stat: &StatisticsEntry) -> PlayerStatLine {
    let games = stat.games.as_ref();
    let goals = stat.goals.as_ref();
    let cards = stat.cards.as_ref();

    PlayerStatLine {
        player_name: profile.name.clone(),
        age: profile.age,
        nationality: profile.nationality.clone(),
        weight: profile.weight.clone(),
        height: profile.height.clone(),
        league: stat.league.as_ref().and_then(|l| l.name.clone()),
        team: stat.team.as_ref().and_then(|t| t.name.clone()),
        appearances: games.and_then(|g| g.appearances),
        lineups: games.and_then(|g| g.lineups),
        minutes: games.and_then(|g| g.minutes),
        goals: goals.and_then(|g| g.total),
        assists: goals.and_then(|g| g.assists),
        yellow_cards: cards.and_then(|c| c.yellow),
        red_cards: cards.and_then(|c| c.red),
        rating: games.and_then(|g| g.rating),
        passes_total: stat.passes.as_ref().and_then(|p| p.total),
        tackles_total: stat.tackles.as_ref().and_then(|t| t.total),
        duels_total: stat.duels.as_ref().and_then(|d| d.total),
    }
}
