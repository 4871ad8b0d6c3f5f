//! Row filters shared by every aggregation query

use super::rows::GameContext;
use crate::cli::types::{GameType, PlayerId, Season};
use rusqlite::{Row, ToSql};

/// Which rows feed an aggregate.
///
/// Only `game_type` rows are counted (regular season unless asked otherwise),
/// and only recognized player identities are ever returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatFilter {
    pub game_type: GameType,
    pub player_id: Option<PlayerId>,
    pub season: Option<Season>,
}

impl StatFilter {
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            ..Self::default()
        }
    }

    pub fn for_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn in_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Append the WHERE clause for a stat table aliased `s`, joined to
    /// `games g` and `players p`.
    pub(crate) fn push_conditions(&self, query: &mut String, params: &mut Vec<Box<dyn ToSql>>) {
        query.push_str(" WHERE p.pfa_url IS NOT NULL AND g.game_type = ?");
        params.push(Box::new(self.game_type.as_str()));

        if let Some(player_id) = &self.player_id {
            query.push_str(" AND s.player_id = ?");
            params.push(Box::new(player_id.as_str().to_string()));
        }

        if let Some(season) = self.season {
            query.push_str(" AND g.season = ?");
            params.push(Box::new(season.as_u16()));
        }
    }
}

/// FROM clause joining a stat table to its game and player.
pub(crate) fn stat_source(table: &str) -> String {
    format!(
        "FROM {table} s
         JOIN games g ON g.game_id = s.game_id
         JOIN players p ON p.player_id = s.player_id"
    )
}

/// Columns read by [`game_context`].
pub(crate) const GAME_CONTEXT_COLUMNS: &str =
    "g.game_id, g.season, g.game_date, g.game_type, g.opponent";

pub(crate) const GAME_CONTEXT_WIDTH: usize = 5;

pub(crate) fn game_context(row: &Row, at: usize) -> rusqlite::Result<GameContext> {
    Ok(GameContext {
        game_id: row.get(at)?,
        season: row.get(at + 1)?,
        game_date: row.get(at + 2)?,
        game_type: row.get(at + 3)?,
        opponent: row.get(at + 4)?,
    })
}
