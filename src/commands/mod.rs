//! Query operations of the football stats client, plus their CLI handlers.

pub mod leagues;
pub mod players;
pub mod teams;

pub use leagues::{favorite_leagues, list_leagues, FAVORITE_LEAGUES};
pub use players::{fetch_player_stats, get_player_data, resolve_player_id};
pub use teams::{aggregate_favorite_teams, list_teams_for_league, AggregateTeamsParams};
