//! Defensive aggregation across the tackles, sacks and interceptions tables.
//!
//! Each source table is aggregated on its own, keyed by player (plus season or
//! game depending on the scope). The keys of all three partial maps are then
//! unioned into one universe and every key is merged with zero defaults for
//! the sources that have no row for it. A player who only ever recorded an
//! interception still gets a row.

use super::filter::{game_context, stat_source, StatFilter};
use super::rows::*;
use crate::cli::types::{GameId, PlayerId, Scope, Season};
use crate::error::Result;
use crate::storage::{DefenseLine, StatsDatabase};
use rusqlite::{Row, ToSql};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

const TACKLES_TABLE: &str = "player_defense";
const SACKS_TABLE: &str = "player_sacks";
const INTERCEPTIONS_TABLE: &str = "player_interceptions";

// Counters are cast so a fractional cell cannot turn a sum into REAL.
const TACKLE_SUMS: &str = "COUNT(DISTINCT s.game_id),
    CAST(COALESCE(SUM(s.tkl), 0) AS INTEGER), CAST(COALESCE(SUM(s.tfl), 0) AS INTEGER),
    CAST(COALESCE(SUM(s.qh), 0) AS INTEGER), CAST(COALESCE(SUM(s.pd), 0) AS INTEGER),
    CAST(COALESCE(SUM(s.ff), 0) AS INTEGER)";

const SACK_SUMS: &str = "COUNT(DISTINCT s.game_id), COALESCE(SUM(s.sacks), 0.0),
    CAST(COALESCE(SUM(s.yds), 0) AS INTEGER)";

const INTERCEPTION_SUMS: &str = "COUNT(DISTINCT s.game_id),
    CAST(COALESCE(SUM(s.int_count), 0) AS INTEGER),
    CAST(COALESCE(SUM(s.yds), 0) AS INTEGER), CAST(COALESCE(SUM(s.td), 0) AS INTEGER)";

/// Identity of one merged row: player, season (season and game scope) and
/// game (game scope).
type MergeKey = (PlayerId, Option<Season>, Option<GameId>);

// Leading columns of every partial query, padded so all scopes share offsets.
const HEAD_WIDTH: usize = 10;

fn head_columns(scope: Scope) -> (&'static str, &'static str) {
    match scope {
        Scope::Career => (
            "s.player_id, MAX(p.player_name), MIN(g.season), MAX(g.season),
             NULL, NULL, NULL, NULL, NULL, MAX(s.team)",
            "s.player_id",
        ),
        Scope::Season => (
            "s.player_id, MAX(p.player_name), g.season, g.season,
             NULL, NULL, NULL, NULL, NULL, MAX(s.team)",
            "s.player_id, g.season",
        ),
        Scope::Game => (
            "s.player_id, MAX(p.player_name), g.season, g.season,
             g.game_id, MAX(g.season), MAX(g.game_date), MAX(g.game_type), MAX(g.opponent),
             MAX(s.team)",
            "s.player_id, g.game_id",
        ),
    }
}

#[derive(Debug, Clone)]
struct Head {
    player_name: String,
    first_season: Season,
    last_season: Season,
    game: Option<GameContext>,
    team: Option<String>,
}

#[derive(Debug, Clone)]
struct Partial<P> {
    head: Head,
    stats: P,
}

#[derive(Debug, Clone, Default)]
struct TackleTotals {
    games: i64,
    tkl: i64,
    tfl: i64,
    qh: i64,
    pd: i64,
    ff: i64,
}

#[derive(Debug, Clone, Default)]
struct SackTotals {
    games: i64,
    sacks: f64,
    yds: i64,
}

#[derive(Debug, Clone, Default)]
struct InterceptionTotals {
    games: i64,
    count: i64,
    yds: i64,
    td: i64,
}

fn tackle_totals(row: &Row, at: usize) -> rusqlite::Result<TackleTotals> {
    Ok(TackleTotals {
        games: row.get(at)?,
        tkl: row.get(at + 1)?,
        tfl: row.get(at + 2)?,
        qh: row.get(at + 3)?,
        pd: row.get(at + 4)?,
        ff: row.get(at + 5)?,
    })
}

fn sack_totals(row: &Row, at: usize) -> rusqlite::Result<SackTotals> {
    Ok(SackTotals {
        games: row.get(at)?,
        sacks: row.get(at + 1)?,
        yds: row.get(at + 2)?,
    })
}

fn interception_totals(row: &Row, at: usize) -> rusqlite::Result<InterceptionTotals> {
    Ok(InterceptionTotals {
        games: row.get(at)?,
        count: row.get(at + 1)?,
        yds: row.get(at + 2)?,
        td: row.get(at + 3)?,
    })
}

/// One merged defensive row before it is shaped for its scope.
struct Merged {
    key: MergeKey,
    head: Head,
    totals: DefenseTotals,
}

fn merge(
    tackles: BTreeMap<MergeKey, Partial<TackleTotals>>,
    sacks: BTreeMap<MergeKey, Partial<SackTotals>>,
    interceptions: BTreeMap<MergeKey, Partial<InterceptionTotals>>,
) -> Vec<Merged> {
    let universe: BTreeSet<&MergeKey> = tackles
        .keys()
        .chain(sacks.keys())
        .chain(interceptions.keys())
        .collect();

    let mut merged = Vec::with_capacity(universe.len());
    for key in universe {
        let t = tackles.get(key);
        let s = sacks.get(key);
        let i = interceptions.get(key);

        let heads: Vec<&Head> = [t.map(|p| &p.head), s.map(|p| &p.head), i.map(|p| &p.head)]
            .into_iter()
            .flatten()
            .collect();
        let Some(base) = heads.first() else {
            continue;
        };

        // A source with no row for the key takes no part in the season span.
        let mut head = (*base).clone();
        head.first_season = heads.iter().map(|h| h.first_season).min().unwrap_or(head.first_season);
        head.last_season = heads.iter().map(|h| h.last_season).max().unwrap_or(head.last_season);
        if head.team.is_none() {
            head.team = heads.iter().find_map(|h| h.team.clone());
        }

        let totals = DefenseTotals {
            games: t.map_or(0, |p| p.stats.games)
                + s.map_or(0, |p| p.stats.games)
                + i.map_or(0, |p| p.stats.games),
            tkl: t.map_or(0, |p| p.stats.tkl),
            tfl: t.map_or(0, |p| p.stats.tfl),
            qh: t.map_or(0, |p| p.stats.qh),
            pd_count: t.map_or(0, |p| p.stats.pd),
            ff: t.map_or(0, |p| p.stats.ff),
            sacks: s.map_or(0.0, |p| p.stats.sacks),
            sack_yds: s.map_or(0, |p| p.stats.yds),
            int_count: i.map_or(0, |p| p.stats.count),
            int_yds: i.map_or(0, |p| p.stats.yds),
            int_td: i.map_or(0, |p| p.stats.td),
        };

        merged.push(Merged {
            key: key.clone(),
            head,
            totals,
        });
    }
    merged
}

impl StatsDatabase {
    /// Aggregate one defensive source table on its own.
    fn defense_partials<P>(
        &self,
        table: &str,
        sums: &str,
        totals: fn(&Row, usize) -> rusqlite::Result<P>,
        scope: Scope,
        filter: &StatFilter,
    ) -> Result<BTreeMap<MergeKey, Partial<P>>> {
        debug!(table, %scope, ?filter, "defense partials");
        let (head, group) = head_columns(scope);
        let mut query = format!("SELECT {head}, {sums} {}", stat_source(table));
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();
        filter.push_conditions(&mut query, &mut params);
        query.push_str(" GROUP BY ");
        query.push_str(group);

        let rows = self.query_rows(&query, &params, |row| {
            let player_id: PlayerId = row.get(0)?;
            let first_season: Season = row.get(2)?;
            let game_id: Option<GameId> = row.get(4)?;
            let game = match game_id {
                Some(_) => Some(game_context(row, 4)?),
                None => None,
            };
            let team: Option<String> = row.get(9)?;

            let key = match scope {
                Scope::Career => (player_id, None, None),
                Scope::Season => (player_id, Some(first_season), None),
                Scope::Game => (player_id, Some(first_season), game_id),
            };
            let partial = Partial {
                head: Head {
                    player_name: row.get(1)?,
                    first_season,
                    last_season: row.get(3)?,
                    game,
                    team,
                },
                stats: totals(row, HEAD_WIDTH)?,
            };
            Ok((key, partial))
        })?;

        Ok(rows.into_iter().collect())
    }

    fn merged_defense(&self, scope: Scope, filter: &StatFilter) -> Result<Vec<Merged>> {
        let tackles =
            self.defense_partials(TACKLES_TABLE, TACKLE_SUMS, tackle_totals, scope, filter)?;
        let sacks = self.defense_partials(SACKS_TABLE, SACK_SUMS, sack_totals, scope, filter)?;
        let interceptions = self.defense_partials(
            INTERCEPTIONS_TABLE,
            INTERCEPTION_SUMS,
            interception_totals,
            scope,
            filter,
        )?;
        Ok(merge(tackles, sacks, interceptions))
    }

    /// Career defensive totals; the season span covers every source table.
    pub fn career_defense(&self, filter: &StatFilter) -> Result<Vec<CareerRow<DefenseTotals>>> {
        Ok(self
            .merged_defense(Scope::Career, filter)?
            .into_iter()
            .map(|m| CareerRow {
                player_id: m.key.0,
                player_name: m.head.player_name,
                first_season: m.head.first_season,
                last_season: m.head.last_season,
                stats: m.totals,
            })
            .collect())
    }

    pub fn season_defense(&self, filter: &StatFilter) -> Result<Vec<SeasonRow<DefenseTotals>>> {
        Ok(self
            .merged_defense(Scope::Season, filter)?
            .into_iter()
            .map(|m| SeasonRow {
                player_id: m.key.0,
                player_name: m.head.player_name,
                season: m.key.1.unwrap_or(m.head.first_season),
                stats: m.totals,
            })
            .collect())
    }

    /// Per-game defensive lines, folded across the three tables.
    pub fn game_defense(&self, filter: &StatFilter) -> Result<Vec<GameRow<DefenseLine>>> {
        Ok(self
            .merged_defense(Scope::Game, filter)?
            .into_iter()
            .filter_map(|m| {
                let game = m.head.game?;
                Some(GameRow {
                    game,
                    line: DefenseLine {
                        player_id: m.key.0,
                        player_name: m.head.player_name,
                        team: m.head.team,
                        tkl: m.totals.tkl,
                        tfl: m.totals.tfl,
                        qh: m.totals.qh,
                        pd_count: m.totals.pd_count,
                        ff: m.totals.ff,
                        sacks: m.totals.sacks,
                        int_count: m.totals.int_count,
                        int_yds: m.totals.int_yds,
                    },
                })
            })
            .collect())
    }

    /// Every recognized player with a row in any of the three defense tables.
    pub fn defensive_player_ids(&self, filter: &StatFilter) -> Result<BTreeSet<PlayerId>> {
        let mut universe = BTreeSet::new();
        for table in [TACKLES_TABLE, SACKS_TABLE, INTERCEPTIONS_TABLE] {
            let mut query = format!("SELECT DISTINCT s.player_id {}", stat_source(table));
            let mut params: Vec<Box<dyn ToSql>> = Vec::new();
            filter.push_conditions(&mut query, &mut params);
            universe.extend(self.query_rows(&query, &params, |row| row.get::<_, PlayerId>(0))?);
        }
        Ok(universe)
    }
}
