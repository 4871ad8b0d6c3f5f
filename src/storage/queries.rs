//! Primitive read queries over the franchise schema

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{GameId, GameResult, GameType, PlayerId, Season};
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Row, ToSql};
use tracing::{debug, warn};

/// Column list shared by every query that materializes a [`Game`].
pub(crate) const GAME_COLUMNS: &str = "g.game_id, g.season, g.game_date, g.day_of_week, g.game_type,
     g.opponent, g.opponent_abbr, g.home_away, g.saints_score, g.opponent_score, g.result,
     g.location, g.venue, g.attendance, g.boxscore_url";

/// SQL list literal of the franchise team names, for `IN (...)` clauses.
pub(crate) fn franchise_team_list() -> String {
    FRANCHISE_TEAMS
        .iter()
        .map(|team| format!("'{}'", team.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ")
}

impl StatsDatabase {
    /// Run a prepared query with dynamic parameters and collect every row.
    pub(crate) fn query_rows<T, F>(&self, sql: &str, params: &[Box<dyn ToSql>], map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            map,
        )?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Get a single game by id
    pub fn get_game(&self, game_id: &GameId) -> Result<Option<Game>> {
        debug!(game_id = %game_id, "get_game");
        let sql = format!("SELECT {GAME_COLUMNS} FROM games g WHERE g.game_id = ?");
        let game = self
            .conn
            .query_row(&sql, params![game_id.as_str()], row_to_game)
            .optional()?;

        if let Some(game) = &game {
            check_consistency(game);
        }
        Ok(game)
    }

    /// All games of a season ordered by date, optionally restricted to one game type.
    pub fn season_games(&self, season: Season, game_type: Option<GameType>) -> Result<Vec<Game>> {
        debug!(%season, ?game_type, "season_games");
        let mut query = format!("SELECT {GAME_COLUMNS} FROM games g WHERE g.season = ?");
        let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(season.as_u16())];

        if let Some(gt) = game_type {
            query.push_str(" AND g.game_type = ?");
            params.push(Box::new(gt.as_str()));
        }
        query.push_str(" ORDER BY g.game_date, g.game_id");

        let games = self.query_rows(&query, &params, row_to_game)?;
        games.iter().for_each(check_consistency);
        Ok(games)
    }

    /// Whether any game at all exists for the season.
    pub fn season_exists(&self, season: Season) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM games WHERE season = ?",
            params![season.as_u16()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Win/loss records for every season with games of the given type, newest first.
    pub fn list_seasons(&self, game_type: GameType) -> Result<Vec<SeasonRecord>> {
        debug!(%game_type, "list_seasons");
        let query = format!("{} WHERE g.game_type = ? GROUP BY g.season ORDER BY g.season DESC", RECORD_SELECT);
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(game_type.as_str())];
        self.query_rows(&query, &params, |row| row_to_record(row, game_type))
    }

    /// Record for one season and game type; `None` when the season has no such games.
    pub fn season_record(&self, season: Season, game_type: GameType) -> Result<Option<SeasonRecord>> {
        let query = format!(
            "{} WHERE g.game_type = ? AND g.season = ? GROUP BY g.season",
            RECORD_SELECT
        );
        let params: Vec<Box<dyn ToSql>> =
            vec![Box::new(game_type.as_str()), Box::new(season.as_u16())];
        Ok(self
            .query_rows(&query, &params, |row| row_to_record(row, game_type))?
            .into_iter()
            .next())
    }

    /// Get a recognized player by id
    pub fn get_player(&self, player_id: &PlayerId) -> Result<Option<Player>> {
        debug!(player_id = %player_id, "get_player");
        let player = self
            .conn
            .query_row(
                "SELECT player_id, player_name, pfa_url, position, college, height, weight,
                        birth_date, seasons_text
                 FROM players
                 WHERE player_id = ? AND pfa_url IS NOT NULL",
                params![player_id.as_str()],
                |row| {
                    Ok(Player {
                        player_id: row.get(0)?,
                        player_name: row.get(1)?,
                        pfa_url: row.get(2)?,
                        position: row.get(3)?,
                        college: row.get(4)?,
                        height: row.get(5)?,
                        weight: row.get(6)?,
                        birth_date: row.get(7)?,
                        seasons_text: row.get(8)?,
                    })
                },
            )
            .optional()?;
        Ok(player)
    }

    /// Team counters for both sides of one game.
    pub fn team_game_stats(&self, game_id: &GameId) -> Result<Vec<TeamGameStats>> {
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(game_id.as_str().to_string())];
        self.query_rows(
            "SELECT game_id, team,
                    CAST(COALESCE(rush_att, 0) AS INTEGER),
                    CAST(COALESCE(rush_yds, 0) AS INTEGER),
                    CAST(COALESCE(rush_td, 0) AS INTEGER),
                    CAST(COALESCE(pass_att, 0) AS INTEGER),
                    CAST(COALESCE(pass_com, 0) AS INTEGER),
                    CAST(COALESCE(pass_yds, 0) AS INTEGER),
                    CAST(COALESCE(pass_td, 0) AS INTEGER), CAST(COALESCE(pass_int, 0) AS INTEGER),
                    CAST(COALESCE(times_sacked, 0) AS INTEGER),
                    CAST(COALESCE(sack_yds_lost, 0) AS INTEGER),
                    COALESCE(sacks, 0.0), CAST(COALESCE(interceptions, 0) AS INTEGER),
                    CAST(COALESCE(punt_count, 0) AS INTEGER),
                    CAST(COALESCE(punt_yds, 0) AS INTEGER), CAST(total_points AS INTEGER)
             FROM team_game_stats
             WHERE game_id = ?
             ORDER BY team",
            &params,
            |row| {
                Ok(TeamGameStats {
                    game_id: row.get(0)?,
                    team: row.get(1)?,
                    rush_att: row.get(2)?,
                    rush_yds: row.get(3)?,
                    rush_td: row.get(4)?,
                    pass_att: row.get(5)?,
                    pass_com: row.get(6)?,
                    pass_yds: row.get(7)?,
                    pass_td: row.get(8)?,
                    pass_int: row.get(9)?,
                    times_sacked: row.get(10)?,
                    sack_yds_lost: row.get(11)?,
                    sacks: row.get(12)?,
                    interceptions: row.get(13)?,
                    punt_count: row.get(14)?,
                    punt_yds: row.get(15)?,
                    total_points: row.get(16)?,
                })
            },
        )
    }

    /// Team counters summed over a season, one row per side (franchise, opponents).
    pub fn season_team_totals(
        &self,
        season: Season,
        game_type: GameType,
    ) -> Result<Vec<TeamSeasonTotals>> {
        debug!(%season, %game_type, "season_team_totals");
        let query = format!(
            "SELECT CASE WHEN t.team IN ({teams}) THEN 1 ELSE 0 END AS is_franchise,
                    COUNT(DISTINCT t.game_id),
                    CAST(COALESCE(SUM(t.rush_att), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.rush_yds), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.rush_td), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.pass_att), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.pass_com), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.pass_yds), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.pass_td), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.pass_int), 0) AS INTEGER),
                    COALESCE(SUM(t.sacks), 0.0),
                    CAST(COALESCE(SUM(t.interceptions), 0) AS INTEGER),
                    CAST(COALESCE(SUM(t.total_points), 0) AS INTEGER)
             FROM team_game_stats t
             JOIN games g ON g.game_id = t.game_id
             WHERE g.season = ? AND g.game_type = ?
             GROUP BY is_franchise
             ORDER BY is_franchise DESC",
            teams = franchise_team_list()
        );
        let params: Vec<Box<dyn ToSql>> =
            vec![Box::new(season.as_u16()), Box::new(game_type.as_str())];

        self.query_rows(&query, &params, |row| {
            let is_franchise: i64 = row.get(0)?;
            Ok(TeamSeasonTotals {
                season,
                game_type,
                side: if is_franchise == 1 {
                    TeamSide::Franchise
                } else {
                    TeamSide::Opponents
                },
                games: row.get(1)?,
                rush_att: row.get(2)?,
                rush_yds: row.get(3)?,
                rush_td: row.get(4)?,
                pass_att: row.get(5)?,
                pass_com: row.get(6)?,
                pass_yds: row.get(7)?,
                pass_td: row.get(8)?,
                pass_int: row.get(9)?,
                sacks: row.get(10)?,
                interceptions: row.get(11)?,
                total_points: row.get(12)?,
            })
        })
    }

    /// Scoring plays of one game in the order they happened.
    pub fn scoring_plays(&self, game_id: &GameId) -> Result<Vec<ScoringPlay>> {
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(game_id.as_str().to_string())];
        self.query_rows(
            "SELECT id, game_id, quarter, team, description, saints_score, opp_score
             FROM scoring_plays
             WHERE game_id = ?
             ORDER BY quarter, id",
            &params,
            |row| {
                Ok(ScoringPlay {
                    id: row.get(0)?,
                    game_id: row.get(1)?,
                    quarter: row.get(2)?,
                    team: row.get(3)?,
                    description: row.get(4)?,
                    saints_score: row.get(5)?,
                    opp_score: row.get(6)?,
                })
            },
        )
    }

    /// Draft class of one year, in selection order.
    pub fn draft_class(&self, year: Season) -> Result<Vec<DraftPick>> {
        debug!(%year, "draft_class");
        let query = format!("{DRAFT_SELECT} WHERE d.season = ? ORDER BY d.round, d.pick");
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(year.as_u16())];
        self.query_rows(&query, &params, row_to_draft_pick)
    }

    pub fn draft_year_exists(&self, year: Season) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM draft_picks WHERE season = ?",
            params![year.as_u16()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Draft selections linked to a player by id or by case-insensitive name.
    pub fn player_draft_picks(&self, player_id: &PlayerId) -> Result<Vec<DraftPick>> {
        let query = format!(
            "SELECT * FROM ({DRAFT_SELECT}) WHERE linked_player_id = ? ORDER BY season, round, pick"
        );
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(player_id.as_str().to_string())];
        self.query_rows(&query, &params, row_to_draft_pick)
    }

    /// Every player line recorded for one game.
    pub fn box_score(&self, game_id: &GameId) -> Result<BoxScore> {
        debug!(game_id = %game_id, "box_score");
        let params: Vec<Box<dyn ToSql>> = vec![Box::new(game_id.as_str().to_string())];

        let passing = self.query_rows(
            &format!(
                "SELECT {} FROM player_passing s
                 LEFT JOIN players p ON p.player_id = s.player_id
                 WHERE s.game_id = ?
                 ORDER BY s.team, s.yds DESC, s.player_id",
                passing_line_columns("s")
            ),
            &params,
            |row| passing_line(row, 0),
        )?;

        let rushing = self.query_rows(
            &format!(
                "SELECT {} FROM player_rushing s
                 LEFT JOIN players p ON p.player_id = s.player_id
                 WHERE s.game_id = ?
                 ORDER BY s.team, s.yds DESC, s.player_id",
                rushing_line_columns("s")
            ),
            &params,
            |row| rushing_line(row, 0),
        )?;

        let receiving = self.query_rows(
            &format!(
                "SELECT {} FROM player_receiving s
                 LEFT JOIN players p ON p.player_id = s.player_id
                 WHERE s.game_id = ?
                 ORDER BY s.team, s.yds DESC, s.player_id",
                receiving_line_columns("s")
            ),
            &params,
            |row| receiving_line(row, 0),
        )?;

        // The three defense tables are stacked and folded per (player, team).
        let defense = self.query_rows(
            "SELECT u.player_id, COALESCE(p.player_name, u.player_id), u.team,
                    SUM(u.tkl), SUM(u.tfl), SUM(u.qh), SUM(u.pd), SUM(u.ff),
                    SUM(u.sacks), SUM(u.int_count), SUM(u.int_yds)
             FROM (
                 SELECT player_id, team,
                        CAST(COALESCE(tkl, 0) AS INTEGER) AS tkl,
                        CAST(COALESCE(tfl, 0) AS INTEGER) AS tfl,
                        CAST(COALESCE(qh, 0) AS INTEGER) AS qh,
                        CAST(COALESCE(pd, 0) AS INTEGER) AS pd,
                        CAST(COALESCE(ff, 0) AS INTEGER) AS ff,
                        0.0 AS sacks, 0 AS int_count, 0 AS int_yds
                 FROM player_defense WHERE game_id = ?1
                 UNION ALL
                 SELECT player_id, team, 0, 0, 0, 0, 0, COALESCE(sacks, 0.0), 0, 0
                 FROM player_sacks WHERE game_id = ?1
                 UNION ALL
                 SELECT player_id, team, 0, 0, 0, 0, 0, 0.0,
                        CAST(COALESCE(int_count, 0) AS INTEGER), CAST(COALESCE(yds, 0) AS INTEGER)
                 FROM player_interceptions WHERE game_id = ?1
             ) u
             LEFT JOIN players p ON p.player_id = u.player_id
             GROUP BY u.player_id, u.team
             ORDER BY u.team, SUM(u.tkl) DESC, u.player_id",
            &params,
            |row| {
                Ok(DefenseLine {
                    player_id: row.get(0)?,
                    player_name: row.get(1)?,
                    team: row.get(2)?,
                    tkl: row.get(3)?,
                    tfl: row.get(4)?,
                    qh: row.get(5)?,
                    pd_count: row.get(6)?,
                    ff: row.get(7)?,
                    sacks: row.get(8)?,
                    int_count: row.get(9)?,
                    int_yds: row.get(10)?,
                })
            },
        )?;

        Ok(BoxScore {
            passing,
            rushing,
            receiving,
            defense,
        })
    }
}

/// Columns of a [`PassingLine`] read from the passing table aliased `a`.
///
/// Expects the players table to be joined as `p`; unknown identities fall
/// back to their id for the display name.
pub(crate) fn passing_line_columns(a: &str) -> String {
    format!(
        "{a}.player_id, COALESCE(p.player_name, {a}.player_id), {a}.team,
         CAST(COALESCE({a}.att, 0) AS INTEGER), CAST(COALESCE({a}.com, 0) AS INTEGER),
         CAST(COALESCE({a}.yds, 0) AS INTEGER), CAST(COALESCE({a}.td, 0) AS INTEGER),
         CAST(COALESCE({a}.int_thrown, 0) AS INTEGER), CAST(COALESCE({a}.sacked, 0) AS INTEGER),
         CAST(COALESCE({a}.sacked_yds, 0) AS INTEGER),
         CAST(COALESCE({a}.lg, 0) AS INTEGER), {a}.pct, {a}.avg, {a}.rtg"
    )
}

pub(crate) const PASSING_LINE_WIDTH: usize = 14;

pub(crate) fn passing_line(row: &Row, at: usize) -> rusqlite::Result<PassingLine> {
    Ok(PassingLine {
        player_id: row.get(at)?,
        player_name: row.get(at + 1)?,
        team: row.get(at + 2)?,
        att: row.get(at + 3)?,
        com: row.get(at + 4)?,
        yds: row.get(at + 5)?,
        td: row.get(at + 6)?,
        int_thrown: row.get(at + 7)?,
        sacked: row.get(at + 8)?,
        sacked_yds: row.get(at + 9)?,
        lg: row.get(at + 10)?,
        pct: row.get(at + 11)?,
        avg: row.get(at + 12)?,
        rtg: row.get(at + 13)?,
    })
}

pub(crate) fn rushing_line_columns(a: &str) -> String {
    format!(
        "{a}.player_id, COALESCE(p.player_name, {a}.player_id), {a}.team,
         CAST(COALESCE({a}.att, 0) AS INTEGER), CAST(COALESCE({a}.yds, 0) AS INTEGER),
         CAST(COALESCE({a}.td, 0) AS INTEGER), CAST(COALESCE({a}.lg, 0) AS INTEGER),
         {a}.avg"
    )
}

pub(crate) const RUSHING_LINE_WIDTH: usize = 8;

pub(crate) fn rushing_line(row: &Row, at: usize) -> rusqlite::Result<RushingLine> {
    Ok(RushingLine {
        player_id: row.get(at)?,
        player_name: row.get(at + 1)?,
        team: row.get(at + 2)?,
        att: row.get(at + 3)?,
        yds: row.get(at + 4)?,
        td: row.get(at + 5)?,
        lg: row.get(at + 6)?,
        avg: row.get(at + 7)?,
    })
}

pub(crate) fn receiving_line_columns(a: &str) -> String {
    format!(
        "{a}.player_id, COALESCE(p.player_name, {a}.player_id), {a}.team,
         CAST(COALESCE({a}.tar, 0) AS INTEGER), CAST(COALESCE({a}.rec, 0) AS INTEGER),
         CAST(COALESCE({a}.yds, 0) AS INTEGER), CAST(COALESCE({a}.td, 0) AS INTEGER),
         CAST(COALESCE({a}.lg, 0) AS INTEGER), {a}.avg"
    )
}

pub(crate) fn receiving_line(row: &Row, at: usize) -> rusqlite::Result<ReceivingLine> {
    Ok(ReceivingLine {
        player_id: row.get(at)?,
        player_name: row.get(at + 1)?,
        team: row.get(at + 2)?,
        tar: row.get(at + 3)?,
        rec: row.get(at + 4)?,
        yds: row.get(at + 5)?,
        td: row.get(at + 6)?,
        lg: row.get(at + 7)?,
        avg: row.get(at + 8)?,
    })
}

const RECORD_SELECT: &str = "SELECT g.season, COUNT(*),
        COALESCE(SUM(CASE WHEN g.result = 'W' THEN 1 ELSE 0 END), 0),
        COALESCE(SUM(CASE WHEN g.result = 'L' THEN 1 ELSE 0 END), 0),
        COALESCE(SUM(CASE WHEN g.result = 'T' THEN 1 ELSE 0 END), 0),
        CAST(COALESCE(SUM(g.saints_score), 0) AS INTEGER),
        CAST(COALESCE(SUM(g.opponent_score), 0) AS INTEGER)
     FROM games g";

const DRAFT_SELECT: &str = "SELECT d.season, d.round, d.pick, d.player_name, d.player_id,
        d.position, d.college,
        COALESCE(d.player_id,
                 (SELECT p.player_id FROM players p
                  WHERE fold_case(p.player_name) = fold_case(d.player_name)
                    AND p.pfa_url IS NOT NULL
                  ORDER BY p.player_id
                  LIMIT 1)) AS linked_player_id
     FROM draft_picks d";

/// Helper to convert a row selected with [`GAME_COLUMNS`] into a [`Game`]
pub(crate) fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    let result: Option<String> = row.get(10)?;
    Ok(Game {
        game_id: row.get(0)?,
        season: row.get(1)?,
        game_date: row.get(2)?,
        day_of_week: row.get(3)?,
        game_type: row.get(4)?,
        opponent: row.get(5)?,
        opponent_abbr: row.get(6)?,
        home_away: row.get(7)?,
        saints_score: row.get(8)?,
        opponent_score: row.get(9)?,
        result: result.as_deref().and_then(GameResult::from_code),
        location: row.get(11)?,
        venue: row.get(12)?,
        attendance: row.get(13)?,
        boxscore_url: row.get(14)?,
    })
}

fn row_to_record(row: &Row, game_type: GameType) -> rusqlite::Result<SeasonRecord> {
    Ok(SeasonRecord {
        season: row.get(0)?,
        game_type,
        games: row.get(1)?,
        wins: row.get(2)?,
        losses: row.get(3)?,
        ties: row.get(4)?,
        points_for: row.get(5)?,
        points_against: row.get(6)?,
    })
}

fn row_to_draft_pick(row: &Row) -> rusqlite::Result<DraftPick> {
    Ok(DraftPick {
        season: row.get(0)?,
        round: row.get(1)?,
        pick: row.get(2)?,
        player_name: row.get(3)?,
        player_id: row.get(4)?,
        position: row.get(5)?,
        college: row.get(6)?,
        linked_player_id: row.get(7)?,
    })
}

fn check_consistency(game: &Game) {
    if !game.is_consistent() {
        warn!(
            game_id = %game.game_id,
            result = ?game.result,
            saints_score = ?game.saints_score,
            opponent_score = ?game.opponent_score,
            "stored result contradicts final score"
        );
    }
}
