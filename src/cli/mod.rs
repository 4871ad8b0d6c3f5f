//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{Category, GameId, GameType, PlayerId, Scope, Season};

/// Default number of leaderboard rows printed by the CLI.
pub const DEFAULT_LIMIT: u32 = 25;

#[derive(Debug, Parser)]
#[clap(
    name = "saints-stats",
    version,
    about = "Browse New Orleans Saints franchise statistics"
)]
pub struct SaintsStats {
    /// Path to the franchise database (or set `SAINTS_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log each query to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank players for a career, a season or a single game.
    Leaders {
        /// Aggregation scope.
        #[clap(long, short = 'S', value_enum, default_value = "career")]
        scope: Scope,

        /// Statistical category.
        #[clap(long, short, value_enum)]
        category: Category,

        /// Game type to count.
        #[clap(long, short = 't', value_enum, default_value_t = GameType::Regular)]
        game_type: GameType,

        /// Stat to order by (defaults to yds, or sacks for defense).
        #[clap(long)]
        sort: Option<String>,

        /// Maximum number of rows.
        #[clap(long, short = 'n', default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Only rows of this player.
        #[clap(long, short)]
        player: Option<PlayerId>,

        /// Only this season (season and game scope).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Search players by name (case-insensitive substring).
    Search {
        name: String,

        #[clap(long, short = 'n')]
        limit: Option<u32>,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Profile, career totals and draft history of one player.
    Player {
        player_id: PlayerId,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Game-by-game offensive lines of one player (preseason excluded).
    GameLog {
        player_id: PlayerId,

        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Schedule, record, team totals and leaders of one season.
    Season {
        season: Season,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Win/loss record of every season.
    Seasons {
        #[clap(long, short = 't', value_enum, default_value_t = GameType::Regular)]
        game_type: GameType,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Result, team stats, scoring plays and box score of one game.
    Game {
        game_id: GameId,

        /// Output results as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Draft class of one year.
    Draft {
        year: Season,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Chat assistant tools: list definitions or execute one JSON call.
    Tool {
        /// Print the tool definitions.
        #[clap(long, conflicts_with = "call")]
        list: bool,

        /// Tool call as JSON (`{"name": ..., "arguments": {...}}`); `-` reads stdin.
        call: Option<String>,
    },
}
