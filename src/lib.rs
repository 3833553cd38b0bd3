//! Football statistics client library
//!
//! Fetches leagues, teams and player statistics from API-Football (via
//! RapidAPI) and flattens the nested JSON into tabular rows ready for CSV
//! export.
//!
//! ## Features
//!
//! - **League Directory**: list every competition the API knows
//! - **Team Directory**: teams per league, plus an aggregated team table
//!   across a curated set of favorite leagues
//! - **Player Lookup**: resolve a player by name within a team, then fetch
//!   their per-competition season statistics
//! - **Typed Failures**: every operation returns a [`Result`] whose error
//!   says whether the request failed, the response was malformed, or there
//!   was simply nothing to return
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use football_stats::{commands::get_player_data, ApiClient, ClientConfig, Season};
//!
//! # async fn example() -> football_stats::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let rows = get_player_data(
//!     &client,
//!     "Saka",
//!     "Arsenal",
//!     Season::new(2024),
//!     Path::new("teams.csv"),
//! )
//! .await?;
//! println!("{} competitions", rows.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export API_FOOTBALL_KEY=your-rapidapi-key
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use api::{ApiClient, Endpoint};
pub use cli::types::{LeagueId, PlayerId, Season, TeamId};
pub use config::{ClientConfig, API_KEY_ENV_VAR};
pub use error::{FootballError, Result};
pub use models::{League, PlayerStatLine, TeamRow};
