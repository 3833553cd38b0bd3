//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use football_stats::{
    cli::{Commands, FootballStats},
    commands::{
        leagues::handle_leagues,
        players::{handle_player_stats, PlayerStatsParams},
        teams::{handle_aggregate_teams, handle_teams, AggregateTeamsParams},
    },
    telemetry::init_tracing,
    ApiClient, ClientConfig,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let app = FootballStats::parse();

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    let client = ApiClient::new(&config).context("failed to build HTTP client")?;

    match app.command {
        Commands::Leagues { json } => handle_leagues(&client, json).await?,

        Commands::Teams {
            league_id,
            league_name,
            season,
            json,
        } => handle_teams(&client, league_id, &league_name, season, json).await?,

        Commands::AggregateTeams {
            season,
            min_teams,
            output,
        } => {
            let params = AggregateTeamsParams {
                min_teams,
                ..AggregateTeamsParams::favorites(season)
            };
            handle_aggregate_teams(&client, params, &output).await?
        }

        Commands::PlayerStats {
            name,
            team,
            season,
            teams_table,
            output,
            json,
        } => {
            handle_player_stats(
                &client,
                PlayerStatsParams {
                    player_name: name,
                    team_name: team,
                    season,
                    teams_table,
                    output,
                    as_json: json,
                },
            )
            .await?
        }
    }

    Ok(())
}
