//! Player lookups: identity resolution, statistics and the end-to-end query.
//!
//! # Usage
//!
//! [`get_player_data`] chains the three steps: team name → team id (from the
//! persisted team table), player name → player id (free-text search), then
//! player id → stat lines.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    api::{flatten_statistics, ApiClient},
    cli::types::{PlayerId, Season, TeamId},
    core::{resolve_team_id, write_csv, write_csv_file},
    models::PlayerStatLine,
    FootballError, Result,
};

/// Find a player's id by name within a team and season.
///
/// When several players match, the first one returned upstream is taken.
pub async fn resolve_player_id(
    client: &ApiClient,
    team_id: TeamId,
    player_name: &str,
    season: Season,
) -> Result<PlayerId> {
    let matches = client.search_players(team_id, player_name, season).await?;

    let Some(first) = matches.first() else {
        warn!(
            "No player found with name '{}' in team ID {}",
            player_name, team_id
        );
        return Err(FootballError::PlayerNotFound {
            name: player_name.to_string(),
            team_id,
        });
    };

    if matches.len() > 1 {
        info!(
            "{} players match '{}', taking the first",
            matches.len(),
            player_name
        );
    }
    info!("Found player: {} (ID: {})", first.player.name, first.player.id);

    Ok(first.player.id)
}

/// Fetch a player's per-competition statistics for one team and season.
pub async fn fetch_player_stats(
    client: &ApiClient,
    player_id: PlayerId,
    team_id: TeamId,
    season: Season,
) -> Result<Vec<PlayerStatLine>> {
    let response = client.fetch_player(player_id, team_id, season).await?;

    if response.is_empty() {
        warn!(
            "No stats found for player ID {} in team ID {}",
            player_id, team_id
        );
        return Err(FootballError::NoStats { player_id, team_id });
    }

    Ok(flatten_statistics(&response))
}

/// Resolve the team from `teams_table`, then the player, then fetch stats.
///
/// An unknown team fails before any request is sent; an unknown player
/// fails before the stats request.
pub async fn get_player_data(
    client: &ApiClient,
    player_name: &str,
    team_name: &str,
    season: Season,
    teams_table: &Path,
) -> Result<Vec<PlayerStatLine>> {
    let Some(team_id) = resolve_team_id(team_name, teams_table)? else {
        warn!("Team '{}' not found in {}", team_name, teams_table.display());
        return Err(FootballError::TeamNotFound {
            name: team_name.to_string(),
        });
    };

    let player_id = resolve_player_id(client, team_id, player_name, season).await?;
    fetch_player_stats(client, player_id, team_id, season).await
}

/// Configuration for the `player-stats` command.
#[derive(Debug)]
pub struct PlayerStatsParams {
    pub player_name: String,
    pub team_name: String,
    pub season: Season,
    pub teams_table: PathBuf,
    /// Write CSV here instead of stdout.
    pub output: Option<PathBuf>,
    pub as_json: bool,
}

/// Handle the `player-stats` command
pub async fn handle_player_stats(client: &ApiClient, params: PlayerStatsParams) -> Result<()> {
    let rows = get_player_data(
        client,
        &params.player_name,
        &params.team_name,
        params.season,
        &params.teams_table,
    )
    .await?;

    match (&params.output, params.as_json) {
        (Some(path), _) => {
            write_csv_file(path, &rows)?;
            println!("✓ {} stat lines written to {}", rows.len(), path.display());
        }
        (None, true) => println!("{}", serde_json::to_string_pretty(&rows)?),
        (None, false) => write_csv(std::io::stdout().lock(), &rows)?,
    }

    Ok(())
}
