//! Team directory: per-league team lists and the aggregated team table.

use std::path::Path;

use tracing::{info, warn};

use crate::{
    api::ApiClient,
    cli::types::{LeagueId, Season},
    core::write_team_table,
    models::TeamRow,
    FootballError, Result,
};

/// Leagues returning fewer teams than this are left out of the aggregate.
pub const DEFAULT_MIN_TEAMS: usize = 10;

/// Fetch the teams playing `league_id` in `season`.
///
/// Every row is labelled with `league_name` as given by the caller.
pub async fn list_teams_for_league(
    client: &ApiClient,
    league_id: LeagueId,
    league_name: &str,
    season: Season,
) -> Result<Vec<TeamRow>> {
    let entries = client.fetch_teams(league_id, season).await?;

    let teams: Vec<TeamRow> = entries
        .into_iter()
        .map(|entry| TeamRow {
            team_id: entry.team.id,
            team: entry.team.name,
            league: league_name.to_string(),
        })
        .collect();

    info!("Fetched {} teams for league: {}", teams.len(), league_name);
    Ok(teams)
}

/// Parameters for building the aggregated team table.
#[derive(Debug, Clone)]
pub struct AggregateTeamsParams {
    /// Ordered league name → id pairs to query.
    pub leagues: Vec<(String, LeagueId)>,
    pub season: Season,
    /// Minimum team count for a league to be kept.
    pub min_teams: usize,
}

impl AggregateTeamsParams {
    /// Favorite leagues, default threshold.
    pub fn favorites(season: Season) -> Self {
        Self {
            leagues: super::leagues::favorite_leagues(),
            season,
            min_teams: DEFAULT_MIN_TEAMS,
        }
    }
}

/// Query every league in turn, keep those with at least `min_teams` teams,
/// and write the concatenated table to `output`.
///
/// Leagues answered with a non-2xx status are skipped like undersized ones;
/// any other failure aborts the aggregate. If nothing is kept, returns
/// [`FootballError::NothingToAggregate`] and leaves `output` untouched.
pub async fn aggregate_favorite_teams(
    client: &ApiClient,
    params: &AggregateTeamsParams,
    output: &Path,
) -> Result<Vec<TeamRow>> {
    let mut all_teams = Vec::new();

    for (league_name, league_id) in &params.leagues {
        info!("Fetching teams for league: {} (ID: {})", league_name, league_id);

        let result = list_teams_for_league(client, *league_id, league_name, params.season).await;
        let teams = match result {
            Ok(teams) => teams,
            Err(e @ FootballError::Status { .. }) => {
                warn!("Skipping league {}: {}", league_name, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if teams.len() < params.min_teams {
            warn!(
                "Skipping league {}: {} teams is below the minimum of {}",
                league_name,
                teams.len(),
                params.min_teams
            );
            continue;
        }

        all_teams.extend(teams);
    }

    if all_teams.is_empty() {
        return Err(FootballError::NothingToAggregate {
            leagues: params.leagues.len(),
        });
    }

    write_team_table(output, &all_teams)?;
    info!("Wrote {} teams to {}", all_teams.len(), output.display());

    Ok(all_teams)
}

/// Handle the `teams` command
pub async fn handle_teams(
    client: &ApiClient,
    league_id: LeagueId,
    league_name: &str,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let teams = list_teams_for_league(client, league_id, league_name, season).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
    } else {
        crate::core::write_csv(std::io::stdout().lock(), &teams)?;
    }

    Ok(())
}

/// Handle the `aggregate-teams` command
pub async fn handle_aggregate_teams(
    client: &ApiClient,
    params: AggregateTeamsParams,
    output: &Path,
) -> Result<()> {
    let teams = aggregate_favorite_teams(client, &params, output).await?;
    println!("✓ {} teams written to {}", teams.len(), output.display());
    Ok(())
}
