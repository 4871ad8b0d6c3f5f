//! Data models for the storage layer

use crate::cli::types::{GameId, GameResult, GameType, PlayerId, Season};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use serde::{Deserialize, Serialize};

/// Team strings that identify the franchise in per-team tables.
pub const FRANCHISE_TEAMS: [&str; 3] = ["New Orleans Saints", "NO", "Saints"];

/// Whether a `team` column value names the franchise.
pub fn is_franchise_team(team: &str) -> bool {
    FRANCHISE_TEAMS.contains(&team.trim())
}

impl FromSql for GameType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse()
            .map_err(|e: crate::error::StatsError| FromSqlError::Other(Box::new(e)))
    }
}

/// One scheduled or completed franchise game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: GameId,
    pub season: Season,
    pub game_date: String,
    pub day_of_week: Option<String>,
    pub game_type: GameType,
    pub opponent: String,
    pub opponent_abbr: Option<String>,
    /// `home`, `away` or `neutral`
    pub home_away: String,
    pub saints_score: Option<i64>,
    pub opponent_score: Option<i64>,
    /// `None` for games that have not been completed
    pub result: Option<GameResult>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub attendance: Option<i64>,
    pub boxscore_url: Option<String>,
}

impl Game {
    /// Result implied by the final score, when both sides are known.
    pub fn score_result(&self) -> Option<GameResult> {
        match (self.saints_score, self.opponent_score) {
            (Some(own), Some(opp)) => Some(GameResult::from_scores(own, opp)),
            _ => None,
        }
    }

    /// The stored result agrees with the score comparison (vacuously true if
    /// either is missing).
    pub fn is_consistent(&self) -> bool {
        match (self.result, self.score_result()) {
            (Some(stored), Some(derived)) => stored == derived,
            _ => true,
        }
    }
}

/// A player record. Only recognized identities (non-null `pfa_url`) are ever
/// returned by the browsing queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub player_name: String,
    pub pfa_url: Option<String>,
    pub position: Option<String>,
    pub college: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i64>,
    pub birth_date: Option<String>,
    pub seasons_text: Option<String>,
}

/// Player directory entry with the span of seasons the player appears in
/// passing, rushing or receiving tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: Option<String>,
    pub first_season: Option<Season>,
    pub last_season: Option<Season>,
}

/// Per-team counters for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameStats {
    pub game_id: GameId,
    pub team: String,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_td: i64,
    pub pass_att: i64,
    pub pass_com: i64,
    pub pass_yds: i64,
    pub pass_td: i64,
    pub pass_int: i64,
    pub times_sacked: i64,
    pub sack_yds_lost: i64,
    pub sacks: f64,
    pub interceptions: i64,
    pub punt_count: i64,
    pub punt_yds: i64,
    pub total_points: Option<i64>,
}

/// Which side of the ball a team total belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Franchise,
    Opponents,
}

/// Team counters summed over a season, per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeasonTotals {
    pub season: Season,
    pub game_type: GameType,
    pub side: TeamSide,
    pub games: i64,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_td: i64,
    pub pass_att: i64,
    pub pass_com: i64,
    pub pass_yds: i64,
    pub pass_td: i64,
    pub pass_int: i64,
    pub sacks: f64,
    pub interceptions: i64,
    pub total_points: i64,
}

/// Win/loss record of one season for one game type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season: Season,
    pub game_type: GameType,
    pub games: i64,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub points_for: i64,
    pub points_against: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPlay {
    pub id: i64,
    pub game_id: GameId,
    pub quarter: Option<i64>,
    pub team: Option<String>,
    pub description: Option<String>,
    pub saints_score: Option<i64>,
    pub opp_score: Option<i64>,
}

/// A franchise draft selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub season: Season,
    pub round: i64,
    pub pick: i64,
    pub player_name: String,
    pub player_id: Option<PlayerId>,
    pub position: Option<String>,
    pub college: Option<String>,
    /// `player_id` if present, otherwise the recognized player whose name
    /// matches case-insensitively.
    pub linked_player_id: Option<PlayerId>,
}

/// Raw passing line for one (game, player, team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingLine {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: Option<String>,
    pub att: i64,
    pub com: i64,
    pub yds: i64,
    pub td: i64,
    pub int_thrown: i64,
    pub sacked: i64,
    pub sacked_yds: i64,
    pub lg: i64,
    pub pct: Option<f64>,
    pub avg: Option<f64>,
    pub rtg: Option<f64>,
}

/// Raw rushing line for one (game, player, team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RushingLine {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: Option<String>,
    pub att: i64,
    pub yds: i64,
    pub td: i64,
    pub lg: i64,
    pub avg: Option<f64>,
}

/// Raw receiving line for one (game, player, team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingLine {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: Option<String>,
    pub tar: i64,
    pub rec: i64,
    pub yds: i64,
    pub td: i64,
    pub lg: i64,
    pub avg: Option<f64>,
}

/// Defensive line for one (game, player) merged from the three defense tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseLine {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: Option<String>,
    pub tkl: i64,
    pub tfl: i64,
    pub qh: i64,
    pub pd_count: i64,
    pub ff: i64,
    pub sacks: f64,
    pub int_count: i64,
    pub int_yds: i64,
}

/// Every player line recorded for one game, all teams and identities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    pub passing: Vec<PassingLine>,
    pub rushing: Vec<RushingLine>,
    pub receiving: Vec<ReceivingLine>,
    pub defense: Vec<DefenseLine>,
}

impl FromSql for PlayerId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).map(PlayerId)
    }
}

impl FromSql for GameId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).map(GameId)
    }
}

impl FromSql for Season {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let year = i64::column_result(value)?;
        u16::try_from(year)
            .map(Season)
            .map_err(|_| FromSqlError::OutOfRange(year))
    }
}
