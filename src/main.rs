//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use saints_stats::{
    cli::{Commands, SaintsStats},
    commands::{
        draft::handle_draft,
        games::handle_game,
        leaders::{handle_leaders, LeadersParams},
        players::{handle_game_log, handle_player, handle_search},
        seasons::{handle_season, handle_seasons},
        tool::handle_tool,
    },
    core::resolve_database_path,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = SaintsStats::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let db_path = resolve_database_path(app.db);
    tracing::debug!(path = %db_path.display(), "using database");

    match app.command {
        Commands::Leaders {
            scope,
            category,
            game_type,
            sort,
            limit,
            player,
            season,
            json,
        } => handle_leaders(LeadersParams {
            db_path,
            scope,
            category,
            game_type,
            sort,
            limit,
            player,
            season,
            as_json: json,
        })
        .context("leaders")?,

        Commands::Search { name, limit, json } => {
            handle_search(&db_path, &name, limit, json).context("search")?
        }

        Commands::Player { player_id, json } => handle_player(&db_path, &player_id, json)
            .await
            .with_context(|| format!("player {player_id}"))?,

        Commands::GameLog {
            player_id,
            season,
            json,
        } => handle_game_log(&db_path, &player_id, season, json)
            .with_context(|| format!("game log for {player_id}"))?,

        Commands::Season { season, json } => handle_season(&db_path, season, json)
            .await
            .with_context(|| format!("season {season}"))?,

        Commands::Seasons { game_type, json } => {
            handle_seasons(&db_path, game_type, json).context("seasons")?
        }

        Commands::Game { game_id, json } => handle_game(&db_path, &game_id, json)
            .await
            .with_context(|| format!("game {game_id}"))?,

        Commands::Draft { year, json } => {
            handle_draft(&db_path, year, json).with_context(|| format!("draft {year}"))?
        }

        Commands::Tool { list, call } => handle_tool(&db_path, list, call).await.context("tool")?,
    }

    Ok(())
}
