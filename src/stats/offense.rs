//! Passing, rushing and receiving aggregation

use super::filter::{game_context, stat_source, StatFilter, GAME_CONTEXT_COLUMNS, GAME_CONTEXT_WIDTH};
use super::rows::*;
use crate::error::Result;
use crate::storage::queries::{
    passing_line, passing_line_columns, receiving_line, receiving_line_columns, rushing_line,
    rushing_line_columns,
};
use crate::storage::{PassingLine, ReceivingLine, RushingLine, StatsDatabase};
use rusqlite::{Row, ToSql};
use tracing::debug;

type RowMapper<T> = fn(&Row, usize) -> rusqlite::Result<T>;

/// A per-game stat table and the summed columns of its totals block.
struct OffenseTable<T> {
    table: &'static str,
    sums: &'static str,
    totals: RowMapper<T>,
}

// Games played is the distinct count of contributing game ids.
const PASSING: OffenseTable<PassingTotals> = OffenseTable {
    table: "player_passing",
    sums: "COUNT(DISTINCT s.game_id),
           CAST(COALESCE(SUM(s.att), 0) AS INTEGER), CAST(COALESCE(SUM(s.com), 0) AS INTEGER),
           CAST(COALESCE(SUM(s.yds), 0) AS INTEGER), CAST(COALESCE(SUM(s.td), 0) AS INTEGER),
           CAST(COALESCE(SUM(s.int_thrown), 0) AS INTEGER),
           CAST(COALESCE(SUM(s.sacked), 0) AS INTEGER),
           CAST(COALESCE(SUM(s.sacked_yds), 0) AS INTEGER),
           CAST(COALESCE(MAX(s.lg), 0) AS INTEGER)",
    totals: passing_totals,
};

const RUSHING: OffenseTable<RushingTotals> = OffenseTable {
    table: "player_rushing",
    sums: "COUNT(DISTINCT s.game_id),
           CAST(COALESCE(SUM(s.att), 0) AS INTEGER), CAST(COALESCE(SUM(s.yds), 0) AS INTEGER),
           CAST(COALESCE(SUM(s.td), 0) AS INTEGER), CAST(COALESCE(MAX(s.lg), 0) AS INTEGER)",
    totals: rushing_totals,
};

const RECEIVING: OffenseTable<ReceivingTotals> = OffenseTable {
    table: "player_receiving",
    sums: "COUNT(DISTINCT s.game_id),
           CAST(COALESCE(SUM(s.tar), 0) AS INTEGER), CAST(COALESCE(SUM(s.rec), 0) AS INTEGER),
           CAST(COALESCE(SUM(s.yds), 0) AS INTEGER), CAST(COALESCE(SUM(s.td), 0) AS INTEGER),
           CAST(COALESCE(MAX(s.lg), 0) AS INTEGER)",
    totals: receiving_totals,
};

fn passing_totals(row: &Row, at: usize) -> rusqlite::Result<PassingTotals> {
    Ok(PassingTotals {
        games: row.get(at)?,
        att: row.get(at + 1)?,
        com: row.get(at + 2)?,
        yds: row.get(at + 3)?,
        td: row.get(at + 4)?,
        int_thrown: row.get(at + 5)?,
        sacked: row.get(at + 6)?,
        sacked_yds: row.get(at + 7)?,
        lg: row.get(at + 8)?,
        ..PassingTotals::default()
    }
    .with_rates())
}

fn rushing_totals(row: &Row, at: usize) -> rusqlite::Result<RushingTotals> {
    Ok(RushingTotals {
        games: row.get(at)?,
        att: row.get(at + 1)?,
        yds: row.get(at + 2)?,
        td: row.get(at + 3)?,
        lg: row.get(at + 4)?,
        ..RushingTotals::default()
    }
    .with_rates())
}

fn receiving_totals(row: &Row, at: usize) -> rusqlite::Result<ReceivingTotals> {
    Ok(ReceivingTotals {
        games: row.get(at)?,
        tar: row.get(at + 1)?,
        rec: row.get(at + 2)?,
        yds: row.get(at + 3)?,
        td: row.get(at + 4)?,
        lg: row.get(at + 5)?,
        ..ReceivingTotals::default()
    }
    .with_rates())
}

impl StatsDatabase {
    fn career_totals<T>(&self, source: &OffenseTable<T>, filter: &StatFilter) -> Result<Vec<CareerRow<T>>> {
        debug!(table = source.table, ?filter, "career totals");
        let mut query = format!(
            "SELECT s.player_id, p.player_name, MIN(g.season), MAX(g.season), {} {}",
            source.sums,
            stat_source(source.table)
        );
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();
        filter.push_conditions(&mut query, &mut params);
        query.push_str(" GROUP BY s.player_id");

        self.query_rows(&query, &params, |row| {
            Ok(CareerRow {
                player_id: row.get(0)?,
                player_name: row.get(1)?,
                first_season: row.get(2)?,
                last_season: row.get(3)?,
                stats: (source.totals)(row, 4)?,
            })
        })
    }

    fn season_totals<T>(&self, source: &OffenseTable<T>, filter: &StatFilter) -> Result<Vec<SeasonRow<T>>> {
        debug!(table = source.table, ?filter, "season totals");
        let mut query = format!(
            "SELECT s.player_id, p.player_name, g.season, {} {}",
            source.sums,
            stat_source(source.table)
        );
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();
        filter.push_conditions(&mut query, &mut params);
        query.push_str(" GROUP BY s.player_id, g.season");

        self.query_rows(&query, &params, |row| {
            Ok(SeasonRow {
                player_id: row.get(0)?,
                player_name: row.get(1)?,
                season: row.get(2)?,
                stats: (source.totals)(row, 3)?,
            })
        })
    }

    fn game_lines<L>(
        &self,
        table: &str,
        columns: String,
        line: RowMapper<L>,
        filter: &StatFilter,
    ) -> Result<Vec<GameRow<L>>> {
        debug!(table, ?filter, "game lines");
        let mut query = format!("SELECT {GAME_CONTEXT_COLUMNS}, {columns} {}", stat_source(table));
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();
        filter.push_conditions(&mut query, &mut params);

        self.query_rows(&query, &params, |row| {
            Ok(GameRow {
                game: game_context(row, 0)?,
                line: line(row, GAME_CONTEXT_WIDTH)?,
            })
        })
    }

    /// Passing totals per player over every matching game.
    pub fn career_passing(&self, filter: &StatFilter) -> Result<Vec<CareerRow<PassingTotals>>> {
        self.career_totals(&PASSING, filter)
    }

    /// Passing totals per (player, season).
    pub fn season_passing(&self, filter: &StatFilter) -> Result<Vec<SeasonRow<PassingTotals>>> {
        self.season_totals(&PASSING, filter)
    }

    /// Unaggregated passing lines.
    pub fn game_passing(&self, filter: &StatFilter) -> Result<Vec<GameRow<PassingLine>>> {
        self.game_lines(PASSING.table, passing_line_columns("s"), passing_line, filter)
    }

    pub fn career_rushing(&self, filter: &StatFilter) -> Result<Vec<CareerRow<RushingTotals>>> {
        self.career_totals(&RUSHING, filter)
    }

    pub fn season_rushing(&self, filter: &StatFilter) -> Result<Vec<SeasonRow<RushingTotals>>> {
        self.season_totals(&RUSHING, filter)
    }

    pub fn game_rushing(&self, filter: &StatFilter) -> Result<Vec<GameRow<RushingLine>>> {
        self.game_lines(RUSHING.table, rushing_line_columns("s"), rushing_line, filter)
    }

    pub fn career_receiving(&self, filter: &StatFilter) -> Result<Vec<CareerRow<ReceivingTotals>>> {
        self.career_totals(&RECEIVING, filter)
    }

    pub fn season_receiving(&self, filter: &StatFilter) -> Result<Vec<SeasonRow<ReceivingTotals>>> {
        self.season_totals(&RECEIVING, filter)
    }

    pub fn game_receiving(&self, filter: &StatFilter) -> Result<Vec<GameRow<ReceivingLine>>> {
        self.game_lines(RECEIVING.table, receiving_line_columns("s"), receiving_line, filter)
    }
}
