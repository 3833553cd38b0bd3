//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{LeagueId, Season};

use crate::commands::teams::DEFAULT_MIN_TEAMS;
use crate::core::DEFAULT_TEAMS_TABLE;

#[derive(Debug, Parser)]
#[clap(
    name = "football-stats",
    about = "League, team and player statistics from API-Football"
)]
pub struct FootballStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every league known to the API.
    Leagues {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the teams of one league for a season (CSV on stdout).
    Teams {
        /// League ID (e.g. 39 for the Premier League).
        #[clap(long, short)]
        league_id: LeagueId,

        /// Label written in the League column.
        #[clap(long)]
        league_name: String,

        /// Season year (e.g. 2024 for 2024/25).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of CSV.
        #[clap(long)]
        json: bool,
    },

    /// Fetch teams for every favorite league and write one team table.
    AggregateTeams {
        /// Season year (e.g. 2024 for 2024/25).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Leagues with fewer teams than this are skipped.
        #[clap(long, default_value_t = DEFAULT_MIN_TEAMS)]
        min_teams: usize,

        /// Where to write the team table.
        #[clap(long, short, default_value = DEFAULT_TEAMS_TABLE)]
        output: PathBuf,
    },

    /// Get a player's per-competition stats by player and team name.
    ///
    /// The team is looked up in a table written by `aggregate-teams`.
    PlayerStats {
        /// Player name as searched upstream (e.g. "Saka").
        #[clap(long, short = 'n')]
        name: String,

        /// Exact team name as it appears in the team table.
        #[clap(long, short)]
        team: String,

        /// Season year (e.g. 2024 for 2024/25).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Team table written by `aggregate-teams`.
        #[clap(long, default_value = DEFAULT_TEAMS_TABLE)]
        teams_table: PathBuf,

        /// Write CSV to this file instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output results as JSON instead of CSV.
        #[clap(long)]
        json: bool,
    },
}
