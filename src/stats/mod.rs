//! Aggregation and leaderboard engine
//!
//! Builds on the primitive reads of [`crate::storage`]:
//! - `offense`: passing, rushing and receiving totals per career, season or game
//! - `defense`: the three-table defensive union
//! - `leaderboard`: the twelve scope × category leaderboards and their ordering
//! - `directory`: player search
//! - `game_log`: per-game offensive lines of one player
//! - `rates`: rate statistics recomputed from summed counters

mod defense;
mod directory;
mod filter;
mod game_log;
mod leaderboard;
mod offense;
pub mod rates;
mod rows;


pub use filter::StatFilter;
pub use game_log::GameLogEntry;
pub use leaderboard::{Leaderboard, LeaderboardKind, LeaderboardQuery, SortValue};
pub use rows::{
    CareerRow, DefenseTotals, GameContext, GameRow, LineIdentity, PassingTotals, ReceivingTotals,
    RushingTotals, SeasonRow,
};
