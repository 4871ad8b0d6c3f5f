//! The twelve scope × category leaderboards.

use super::filter::StatFilter;
use super::rates;
use super::rows::*;
use crate::cli::types::{
    Category, DefenseStat, GameType, PassingStat, PlayerId, ReceivingStat, RushingStat, Scope,
    Season,
};
use crate::error::{Result, StatsError};
use crate::storage::{DefenseLine, PassingLine, ReceivingLine, RushingLine, StatsDatabase};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Value a row is ordered by for a given sort stat. Missing rates sort last.
pub trait SortValue<S> {
    fn sort_value(&self, stat: S) -> f64;
}

fn rate(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NEG_INFINITY)
}

impl SortValue<PassingStat> for PassingTotals {
    fn sort_value(&self, stat: PassingStat) -> f64 {
        match stat {
            PassingStat::Yds => self.yds as f64,
            PassingStat::Td => self.td as f64,
            PassingStat::Att => self.att as f64,
            PassingStat::Com => self.com as f64,
            PassingStat::Int => self.int_thrown as f64,
            PassingStat::Games => self.games as f64,
            PassingStat::Rating => rate(self.rating),
        }
    }
}

impl SortValue<PassingStat> for PassingLine {
    fn sort_value(&self, stat: PassingStat) -> f64 {
        match stat {
            PassingStat::Yds => self.yds as f64,
            PassingStat::Td => self.td as f64,
            PassingStat::Att => self.att as f64,
            PassingStat::Com => self.com as f64,
            PassingStat::Int => self.int_thrown as f64,
            PassingStat::Games => 1.0,
            PassingStat::Rating => rate(self.rtg.or_else(|| {
                rates::passer_rating(self.att, self.com, self.yds, self.td, self.int_thrown)
            })),
        }
    }
}

impl SortValue<RushingStat> for RushingTotals {
    fn sort_value(&self, stat: RushingStat) -> f64 {
        match stat {
            RushingStat::Yds => self.yds as f64,
            RushingStat::Td => self.td as f64,
            RushingStat::Att => self.att as f64,
            RushingStat::Games => self.games as f64,
            RushingStat::Long => self.lg as f64,
        }
    }
}

impl SortValue<RushingStat> for RushingLine {
    fn sort_value(&self, stat: RushingStat) -> f64 {
        match stat {
            RushingStat::Yds => self.yds as f64,
            RushingStat::Td => self.td as f64,
            RushingStat::Att => self.att as f64,
            RushingStat::Games => 1.0,
            RushingStat::Long => self.lg as f64,
        }
    }
}

impl SortValue<ReceivingStat> for ReceivingTotals {
    fn sort_value(&self, stat: ReceivingStat) -> f64 {
        match stat {
            ReceivingStat::Yds => self.yds as f64,
            ReceivingStat::Td => self.td as f64,
            ReceivingStat::Rec => self.rec as f64,
            ReceivingStat::Tar => self.tar as f64,
            ReceivingStat::Games => self.games as f64,
            ReceivingStat::Long => self.lg as f64,
        }
    }
}

impl SortValue<ReceivingStat> for ReceivingLine {
    fn sort_value(&self, stat: ReceivingStat) -> f64 {
        match stat {
            ReceivingStat::Yds => self.yds as f64,
            ReceivingStat::Td => self.td as f64,
            ReceivingStat::Rec => self.rec as f64,
            ReceivingStat::Tar => self.tar as f64,
            ReceivingStat::Games => 1.0,
            ReceivingStat::Long => self.lg as f64,
        }
    }
}

impl SortValue<DefenseStat> for DefenseTotals {
    fn sort_value(&self, stat: DefenseStat) -> f64 {
        match stat {
            DefenseStat::Sacks => self.sacks,
            DefenseStat::Tkl => self.tkl as f64,
            DefenseStat::Tfl => self.tfl as f64,
            DefenseStat::Qh => self.qh as f64,
            DefenseStat::Pd => self.pd_count as f64,
            DefenseStat::Ff => self.ff as f64,
            DefenseStat::Int => self.int_count as f64,
            DefenseStat::Games => self.games as f64,
        }
    }
}

impl SortValue<DefenseStat> for DefenseLine {
    fn sort_value(&self, stat: DefenseStat) -> f64 {
        match stat {
            DefenseStat::Sacks => self.sacks,
            DefenseStat::Tkl => self.tkl as f64,
            DefenseStat::Tfl => self.tfl as f64,
            DefenseStat::Qh => self.qh as f64,
            DefenseStat::Pd => self.pd_count as f64,
            DefenseStat::Ff => self.ff as f64,
            DefenseStat::Int => self.int_count as f64,
            DefenseStat::Games => 1.0,
        }
    }
}

impl<S, T: SortValue<S>> SortValue<S> for CareerRow<T> {
    fn sort_value(&self, stat: S) -> f64 {
        self.stats.sort_value(stat)
    }
}

impl<S, T: SortValue<S>> SortValue<S> for SeasonRow<T> {
    fn sort_value(&self, stat: S) -> f64 {
        self.stats.sort_value(stat)
    }
}

impl<S, L: SortValue<S>> SortValue<S> for GameRow<L> {
    fn sort_value(&self, stat: S) -> f64 {
        self.line.sort_value(stat)
    }
}

/// Order rows by `stat` descending, breaking ties by player, season and game,
/// then apply the limit.
pub(crate) fn rank<R, S>(mut rows: Vec<R>, stat: S, limit: Option<u32>) -> Vec<R>
where
    R: Ranked + SortValue<S>,
    S: Copy,
{
    rows.sort_by(|a, b| {
        b.sort_value(stat)
            .total_cmp(&a.sort_value(stat))
            .then_with(|| a.tie_key().cmp(&b.tie_key()))
    });
    if let Some(limit) = limit {
        rows.truncate(limit as usize);
    }
    rows
}

/// One of the twelve leaderboards, carrying the stat it is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "sort_by", rename_all = "snake_case")]
pub enum LeaderboardKind {
    CareerPassing(PassingStat),
    SeasonPassing(PassingStat),
    GamePassing(PassingStat),
    CareerRushing(RushingStat),
    SeasonRushing(RushingStat),
    GameRushing(RushingStat),
    CareerReceiving(ReceivingStat),
    SeasonReceiving(ReceivingStat),
    GameReceiving(ReceivingStat),
    CareerDefense(DefenseStat),
    SeasonDefense(DefenseStat),
    GameDefense(DefenseStat),
}

fn sort_stat<S>(sort: Option<&str>) -> Result<S>
where
    S: FromStr<Err = StatsError> + Default,
{
    match sort {
        Some(value) => value.parse(),
        None => Ok(S::default()),
    }
}

impl LeaderboardKind {
    /// Resolve a scope, a category and an optional sort stat name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saints_stats::{Category, DefenseStat, LeaderboardKind, Scope};
    ///
    /// let kind = LeaderboardKind::new(Scope::Career, Category::Defense, None).unwrap();
    /// assert_eq!(kind, LeaderboardKind::CareerDefense(DefenseStat::Sacks));
    /// assert!(LeaderboardKind::new(Scope::Game, Category::Rushing, Some("sacks")).is_err());
    /// ```
    pub fn new(scope: Scope, category: Category, sort: Option<&str>) -> Result<Self> {
        use LeaderboardKind::*;
        Ok(match (scope, category) {
            (Scope::Career, Category::Passing) => CareerPassing(sort_stat(sort)?),
            (Scope::Season, Category::Passing) => SeasonPassing(sort_stat(sort)?),
            (Scope::Game, Category::Passing) => GamePassing(sort_stat(sort)?),
            (Scope::Career, Category::Rushing) => CareerRushing(sort_stat(sort)?),
            (Scope::Season, Category::Rushing) => SeasonRushing(sort_stat(sort)?),
            (Scope::Game, Category::Rushing) => GameRushing(sort_stat(sort)?),
            (Scope::Career, Category::Receiving) => CareerReceiving(sort_stat(sort)?),
            (Scope::Season, Category::Receiving) => SeasonReceiving(sort_stat(sort)?),
            (Scope::Game, Category::Receiving) => GameReceiving(sort_stat(sort)?),
            (Scope::Career, Category::Defense) => CareerDefense(sort_stat(sort)?),
            (Scope::Season, Category::Defense) => SeasonDefense(sort_stat(sort)?),
            (Scope::Game, Category::Defense) => GameDefense(sort_stat(sort)?),
        })
    }

    pub fn scope(&self) -> Scope {
        use LeaderboardKind::*;
        match self {
            CareerPassing(_) | CareerRushing(_) | CareerReceiving(_) | CareerDefense(_) => {
                Scope::Career
            }
            SeasonPassing(_) | SeasonRushing(_) | SeasonReceiving(_) | SeasonDefense(_) => {
                Scope::Season
            }
            GamePassing(_) | GameRushing(_) | GameReceiving(_) | GameDefense(_) => Scope::Game,
        }
    }

    pub fn category(&self) -> Category {
        use LeaderboardKind::*;
        match self {
            CareerPassing(_) | SeasonPassing(_) | GamePassing(_) => Category::Passing,
            CareerRushing(_) | SeasonRushing(_) | GameRushing(_) => Category::Rushing,
            CareerReceiving(_) | SeasonReceiving(_) | GameReceiving(_) => Category::Receiving,
            CareerDefense(_) | SeasonDefense(_) | GameDefense(_) => Category::Defense,
        }
    }
}

/// A leaderboard request.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardQuery {
    pub kind: LeaderboardKind,
    pub game_type: GameType,
    /// `None` returns every row.
    pub limit: Option<u32>,
    pub player_id: Option<PlayerId>,
    /// Only valid for season and game scope.
    pub season: Option<Season>,
}

impl LeaderboardQuery {
    /// Regular season, unlimited, unfiltered.
    pub fn new(kind: LeaderboardKind) -> Self {
        Self {
            kind,
            game_type: GameType::default(),
            limit: None,
            player_id: None,
            season: None,
        }
    }

    pub fn game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Reject parameter combinations that have no meaning for the scope.
    pub fn validate(&self) -> Result<()> {
        if self.kind.scope() == Scope::Career && self.season.is_some() {
            return Err(StatsError::InvalidParameter {
                name: "season",
                reason: "career leaderboards span every season; use season or game scope"
                    .to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn filter(&self) -> StatFilter {
        StatFilter {
            game_type: self.game_type,
            player_id: self.player_id.clone(),
            season: self.season,
        }
    }
}

/// Ranked leaderboard rows, shaped by scope and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Leaderboard {
    CareerPassing(Vec<CareerRow<PassingTotals>>),
    SeasonPassing(Vec<SeasonRow<PassingTotals>>),
    GamePassing(Vec<GameRow<PassingLine>>),
    CareerRushing(Vec<CareerRow<RushingTotals>>),
    SeasonRushing(Vec<SeasonRow<RushingTotals>>),
    GameRushing(Vec<GameRow<RushingLine>>),
    CareerReceiving(Vec<CareerRow<ReceivingTotals>>),
    SeasonReceiving(Vec<SeasonRow<ReceivingTotals>>),
    GameReceiving(Vec<GameRow<ReceivingLine>>),
    CareerDefense(Vec<CareerRow<DefenseTotals>>),
    SeasonDefense(Vec<SeasonRow<DefenseTotals>>),
    GameDefense(Vec<GameRow<DefenseLine>>),
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        use Leaderboard::*;
        match self {
            CareerPassing(rows) => rows.len(),
            SeasonPassing(rows) => rows.len(),
            GamePassing(rows) => rows.len(),
            CareerRushing(rows) => rows.len(),
            SeasonRushing(rows) => rows.len(),
            GameRushing(rows) => rows.len(),
            CareerReceiving(rows) => rows.len(),
            SeasonReceiving(rows) => rows.len(),
            GameReceiving(rows) => rows.len(),
            CareerDefense(rows) => rows.len(),
            SeasonDefense(rows) => rows.len(),
            GameDefense(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StatsDatabase {
    /// Compute one leaderboard.
    pub fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Leaderboard> {
        query.validate()?;
        debug!(kind = ?query.kind, game_type = %query.game_type, limit = ?query.limit, "leaderboard");

        let filter = query.filter();
        let limit = query.limit;
        Ok(match query.kind {
            LeaderboardKind::CareerPassing(stat) => {
                Leaderboard::CareerPassing(rank(self.career_passing(&filter)?, stat, limit))
            }
            LeaderboardKind::SeasonPassing(stat) => {
                Leaderboard::SeasonPassing(rank(self.season_passing(&filter)?, stat, limit))
            }
            LeaderboardKind::GamePassing(stat) => {
                Leaderboard::GamePassing(rank(self.game_passing(&filter)?, stat, limit))
            }
            LeaderboardKind::CareerRushing(stat) => {
                Leaderboard::CareerRushing(rank(self.career_rushing(&filter)?, stat, limit))
            }
            LeaderboardKind::SeasonRushing(stat) => {
                Leaderboard::SeasonRushing(rank(self.season_rushing(&filter)?, stat, limit))
            }
            LeaderboardKind::GameRushing(stat) => {
                Leaderboard::GameRushing(rank(self.game_rushing(&filter)?, stat, limit))
            }
            LeaderboardKind::CareerReceiving(stat) => {
                Leaderboard::CareerReceiving(rank(self.career_receiving(&filter)?, stat, limit))
            }
            LeaderboardKind::SeasonReceiving(stat) => {
                Leaderboard::SeasonReceiving(rank(self.season_receiving(&filter)?, stat, limit))
            }
            LeaderboardKind::GameReceiving(stat) => {
                Leaderboard::GameReceiving(rank(self.game_receiving(&filter)?, stat, limit))
            }
            LeaderboardKind::CareerDefense(stat) => {
                Leaderboard::CareerDefense(rank(self.career_defense(&filter)?, stat, limit))
            }
            LeaderboardKind::SeasonDefense(stat) => {
                Leaderboard::SeasonDefense(rank(self.season_defense(&filter)?, stat, limit))
            }
            LeaderboardKind::GameDefense(stat) => {
                Leaderboard::GameDefense(rank(self.game_defense(&filter)?, stat, limit))
            }
        })
    }
}
