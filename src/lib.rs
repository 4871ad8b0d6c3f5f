//! New Orleans Saints Franchise Statistics Library
//!
//! Read-only aggregation over a SQLite database of every Saints game: player
//! directory, career, season and single-game leaderboards, game logs, and
//! composed player, season and game pages.
//!
//! ## Features
//!
//! - **Leaderboards**: passing, rushing, receiving and defense at career, season or game scope
//! - **Defensive Union**: tackles, sacks and interceptions merged into one row per player
//! - **Player Directory**: case-insensitive name search with season spans
//! - **Game Logs**: per-game passing, rushing and receiving lines for one player
//! - **Pages**: concurrent fan-out of independent reads into one document
//! - **Assistant Tools**: JSON tool-call surface with typed argument validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saints_stats::{Category, LeaderboardKind, LeaderboardQuery, Scope, StatsDatabase};
//!
//! # fn example() -> saints_stats::Result<()> {
//! let db = StatsDatabase::open("saints_encyclopedia.db")?;
//! let kind = LeaderboardKind::new(Scope::Career, Category::Passing, Some("td"))?;
//! let board = db.leaderboard(&LeaderboardQuery::new(kind).limit(10))?;
//! println!("{} rows", board.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at the database without passing `--db` each time:
//! ```bash
//! export SAINTS_DB_PATH=/path/to/saints_encyclopedia.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod pages;
pub mod stats;
pub mod storage;
pub mod tools;

// Re-export commonly used types
pub use cli::types::{
    Category, DefenseStat, GameId, GameResult, GameType, PassingStat, PlayerId, ReceivingStat,
    RushingStat, Scope, Season,
};
pub use error::{Result, StatsError};
pub use pages::PageComposer;
pub use stats::{Leaderboard, LeaderboardKind, LeaderboardQuery};
pub use storage::StatsDatabase;

/// Environment variable holding the database path.
pub const DB_PATH_ENV_VAR: &str = "SAINTS_DB_PATH";
