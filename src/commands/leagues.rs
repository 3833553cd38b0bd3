//! League directory: listing competitions and the favorite-leagues map.

use tracing::info;

use crate::{api::ApiClient, cli::types::LeagueId, models::League, Result};

/// Competitions queried by the team aggregate when no other map is given.
pub const FAVORITE_LEAGUES: [(&str, u32); 12] = [
    ("Premier League", 39),
    ("La Liga", 140),
    ("Serie A", 135),
    ("Bundesliga", 78),
    ("Ligue 1", 61),
    ("Eredivisie", 88),
    ("UEFA Champions League", 2),
    ("UEFA Europa League", 3),
    ("UEFA Conference League", 4),
    ("UEFA Super Cup", 5),
    ("Championship", 180),
    ("Primeira Liga", 94),
];

/// The favorite leagues as an ordered name → id list.
pub fn favorite_leagues() -> Vec<(String, LeagueId)> {
    FAVORITE_LEAGUES
        .iter()
        .map(|(name, id)| (name.to_string(), LeagueId::new(*id)))
        .collect()
}

/// List every league the API knows about, in upstream order.
///
/// An empty upstream list is a valid, empty result.
pub async fn list_leagues(client: &ApiClient) -> Result<Vec<League>> {
    let entries = client.fetch_leagues().await?;

    let leagues: Vec<League> = entries
        .into_iter()
        .map(|entry| League {
            league_id: entry.league.id,
            league_name: entry.league.name,
        })
        .collect();

    info!("Fetched {} leagues", leagues.len());
    Ok(leagues)
}

/// Handle the `leagues` command
pub async fn handle_leagues(client: &ApiClient, as_json: bool) -> Result<()> {
    let leagues = list_leagues(client).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&leagues)?);
    } else {
        for league in &leagues {
            println!("{:>6}  {}", league.league_id.as_u32(), league.league_name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_favorite_leagues_are_unique() {
        let leagues = favorite_leagues();
        assert_eq!(leagues.len(), 12);

        let ids: HashSet<_> = leagues.iter().map(|(_, id)| *id).collect();
        let names: HashSet<_> = leagues.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(ids.len(), leagues.len());
        assert_eq!(names.len(), leagues.len());
    }

    #[test]
    fn test_favorite_leagues_keep_order() {
        let leagues = favorite_leagues();
        assert_eq!(leagues[0], ("Premier League".to_string(), LeagueId::new(39)));
        assert_eq!(leagues[11], ("Primeira Liga".to_string(), LeagueId::new(94)));
    }
}
