//! Type-safe wrappers for API-Football identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use time::Season;
