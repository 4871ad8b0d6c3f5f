//! Type-safe wrappers and enums for franchise statistics queries.

pub mod game_type;
pub mod ids;
pub mod leaderboard;
pub mod time;

pub use game_type::{GameResult, GameType};
pub use ids::{GameId, PlayerId};
pub use leaderboard::{Category, DefenseStat, PassingStat, ReceivingStat, RushingStat, Scope};
pub use time::Season;
