//! Row shapes produced by the aggregation engine.
//!
//! Every leaderboard row is one of three wrappers (career, season, game)
//! around a category-specific stat block, so each scope × category pair has a
//! statically known shape.

use super::rates;
use crate::cli::types::{GameId, GameType, PlayerId, Season};
use crate::storage::{DefenseLine, PassingLine, ReceivingLine, RushingLine};
use serde::{Deserialize, Serialize};

/// Totals over a player's whole career, with the span of seasons that
/// contributed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRow<T> {
    pub player_id: PlayerId,
    pub player_name: String,
    pub first_season: Season,
    pub last_season: Season,
    #[serde(flatten)]
    pub stats: T,
}

/// Totals over one (player, season).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRow<T> {
    pub player_id: PlayerId,
    pub player_name: String,
    pub season: Season,
    #[serde(flatten)]
    pub stats: T,
}

/// Where and when a single-game line was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    pub game_id: GameId,
    pub season: Season,
    pub game_date: String,
    pub game_type: GameType,
    pub opponent: String,
}

/// One unaggregated per-game line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRow<L> {
    #[serde(flatten)]
    pub game: GameContext,
    #[serde(flatten)]
    pub line: L,
}

/// Access to the player a raw line belongs to.
pub trait LineIdentity {
    fn player_id(&self) -> &PlayerId;
    fn player_name(&self) -> &str;
}

impl LineIdentity for PassingLine {
    fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }
}

impl LineIdentity for RushingLine {
    fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }
}

impl LineIdentity for ReceivingLine {
    fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }
}

impl LineIdentity for DefenseLine {
    fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }
}

/// Deterministic tie-break key: player id, then season, then game id.
pub(crate) trait Ranked {
    fn tie_key(&self) -> (&str, u16, &str);
}

impl<T> Ranked for CareerRow<T> {
    fn tie_key(&self) -> (&str, u16, &str) {
        (self.player_id.as_str(), 0, "")
    }
}

impl<T> Ranked for SeasonRow<T> {
    fn tie_key(&self) -> (&str, u16, &str) {
        (self.player_id.as_str(), self.season.as_u16(), "")
    }
}

impl<L: LineIdentity> Ranked for GameRow<L> {
    fn tie_key(&self) -> (&str, u16, &str) {
        (
            self.line.player_id().as_str(),
            self.game.season.as_u16(),
            self.game.game_id.as_str(),
        )
    }
}

/// Summed passing counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassingTotals {
    /// Distinct games with a passing row.
    pub games: i64,
    pub att: i64,
    pub com: i64,
    pub yds: i64,
    pub td: i64,
    pub int_thrown: i64,
    pub sacked: i64,
    pub sacked_yds: i64,
    pub lg: i64,
    pub pct: Option<f64>,
    pub ypa: Option<f64>,
    pub rating: Option<f64>,
}

impl PassingTotals {
    /// Fill the rate fields from the summed counters.
    pub fn with_rates(mut self) -> Self {
        self.pct = rates::completion_pct(self.com, self.att);
        self.ypa = rates::yards_per_attempt(self.yds, self.att);
        self.rating =
            rates::passer_rating(self.att, self.com, self.yds, self.td, self.int_thrown);
        self
    }
}

/// Summed rushing counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RushingTotals {
    pub games: i64,
    pub att: i64,
    pub yds: i64,
    pub td: i64,
    pub lg: i64,
    pub avg: Option<f64>,
}

impl RushingTotals {
    pub fn with_rates(mut self) -> Self {
        self.avg = rates::yards_per_attempt(self.yds, self.att);
        self
    }
}

/// Summed receiving counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceivingTotals {
    pub games: i64,
    pub tar: i64,
    pub rec: i64,
    pub yds: i64,
    pub td: i64,
    pub lg: i64,
    pub avg: Option<f64>,
    pub catch_pct: Option<f64>,
}

impl ReceivingTotals {
    pub fn with_rates(mut self) -> Self {
        self.avg = rates::yards_per_reception(self.yds, self.rec);
        self.catch_pct = rates::catch_rate(self.rec, self.tar);
        self
    }
}

/// Defensive counters merged from the tackles, sacks and interceptions tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenseTotals {
    /// Sum of each source table's distinct game count. A game recorded in
    /// more than one table is counted once per table.
    pub games: i64,
    pub tkl: i64,
    pub tfl: i64,
    pub qh: i64,
    pub pd_count: i64,
    pub ff: i64,
    pub sacks: f64,
    pub sack_yds: i64,
    pub int_count: i64,
    pub int_yds: i64,
    pub int_td: i64,
}
