//! Per-game log of a player's offensive lines

use super::filter::{game_context, GAME_CONTEXT_COLUMNS, GAME_CONTEXT_WIDTH};
use super::rows::GameContext;
use crate::cli::types::{GameResult, PlayerId, Season};
use crate::error::{Result, StatsError};
use crate::storage::queries::{
    passing_line, passing_line_columns, receiving_line, receiving_line_columns, rushing_line,
    rushing_line_columns, PASSING_LINE_WIDTH, RUSHING_LINE_WIDTH,
};
use crate::storage::{PassingLine, ReceivingLine, RushingLine, StatsDatabase};
use rusqlite::{Row, ToSql};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One game in which the player recorded a passing, rushing or receiving line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    #[serde(flatten)]
    pub game: GameContext,
    pub home_away: String,
    pub result: Option<GameResult>,
    pub saints_score: Option<i64>,
    pub opponent_score: Option<i64>,
    pub passing: Option<PassingLine>,
    pub rushing: Option<RushingLine>,
    pub receiving: Option<ReceivingLine>,
}

// A player can hold several rows for one game under different team strings;
// each category is folded to one line per game before it is joined. Stored
// rates are kept only when a single row contributed.
const PASSING_BY_GAME: &str = "SELECT game_id, player_id, MAX(team) AS team,
        SUM(att) AS att, SUM(com) AS com, SUM(yds) AS yds, SUM(td) AS td,
        SUM(int_thrown) AS int_thrown, SUM(sacked) AS sacked, SUM(sacked_yds) AS sacked_yds,
        MAX(lg) AS lg,
        CASE WHEN COUNT(*) = 1 THEN MAX(pct) END AS pct,
        CASE WHEN COUNT(*) = 1 THEN MAX(avg) END AS avg,
        CASE WHEN COUNT(*) = 1 THEN MAX(rtg) END AS rtg
     FROM player_passing WHERE player_id = ?1 GROUP BY game_id";

const RUSHING_BY_GAME: &str = "SELECT game_id, player_id, MAX(team) AS team,
        SUM(att) AS att, SUM(yds) AS yds, SUM(td) AS td, MAX(lg) AS lg,
        CASE WHEN COUNT(*) = 1 THEN MAX(avg) END AS avg
     FROM player_rushing WHERE player_id = ?1 GROUP BY game_id";

const RECEIVING_BY_GAME: &str = "SELECT game_id, player_id, MAX(team) AS team,
        SUM(tar) AS tar, SUM(rec) AS rec, SUM(yds) AS yds, SUM(td) AS td, MAX(lg) AS lg,
        CASE WHEN COUNT(*) = 1 THEN MAX(avg) END AS avg
     FROM player_receiving WHERE player_id = ?1 GROUP BY game_id";

/// Read an optional line block; the block is absent when its player id is NULL.
fn optional_line<T>(
    row: &Row,
    at: usize,
    line: fn(&Row, usize) -> rusqlite::Result<T>,
) -> rusqlite::Result<Option<T>> {
    let present: Option<String> = row.get(at)?;
    match present {
        Some(_) => line(row, at).map(Some),
        None => Ok(None),
    }
}

impl StatsDatabase {
    /// Game-by-game offensive lines of a recognized player, oldest first.
    ///
    /// Preseason games never appear, whatever the season filter.
    pub fn player_game_log(
        &self,
        player_id: &PlayerId,
        season: Option<Season>,
    ) -> Result<Vec<GameLogEntry>> {
        debug!(player_id = %player_id, ?season, "player_game_log");
        if self.get_player(player_id)?.is_none() {
            return Err(StatsError::not_found("Player", player_id));
        }

        let mut query = format!(
            "SELECT {GAME_CONTEXT_COLUMNS}, g.home_away, g.result, g.saints_score, g.opponent_score,
                    {}, {}, {}
             FROM (
                 SELECT game_id FROM player_passing WHERE player_id = ?1
                 UNION SELECT game_id FROM player_rushing WHERE player_id = ?1
                 UNION SELECT game_id FROM player_receiving WHERE player_id = ?1
             ) u
             JOIN games g ON g.game_id = u.game_id
             LEFT JOIN players p ON p.player_id = ?1
             LEFT JOIN ({PASSING_BY_GAME}) pp ON pp.game_id = u.game_id
             LEFT JOIN ({RUSHING_BY_GAME}) pr ON pr.game_id = u.game_id
             LEFT JOIN ({RECEIVING_BY_GAME}) pc ON pc.game_id = u.game_id
             WHERE g.game_type != 'preseason'",
            passing_line_columns("pp"),
            rushing_line_columns("pr"),
            receiving_line_columns("pc"),
        );
        let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(player_id.as_str().to_string())];

        if let Some(season) = season {
            query.push_str(" AND g.season = ?2");
            params.push(Box::new(season.as_u16()));
        }
        query.push_str(" ORDER BY g.game_date, g.game_id");

        let passing_at = GAME_CONTEXT_WIDTH + 4;
        let rushing_at = passing_at + PASSING_LINE_WIDTH;
        let receiving_at = rushing_at + RUSHING_LINE_WIDTH;

        self.query_rows(&query, &params, |row| {
            let result: Option<String> = row.get(GAME_CONTEXT_WIDTH + 1)?;
            Ok(GameLogEntry {
                game: game_context(row, 0)?,
                home_away: row.get(GAME_CONTEXT_WIDTH)?,
                result: result.as_deref().and_then(GameResult::from_code),
                saints_score: row.get(GAME_CONTEXT_WIDTH + 2)?,
                opponent_score: row.get(GAME_CONTEXT_WIDTH + 3)?,
                passing: optional_line(row, passing_at, passing_line)?,
                rushing: optional_line(row, rushing_at, rushing_line)?,
                receiving: optional_line(row, receiving_at, receiving_line)?,
            })
        })
    }
}
