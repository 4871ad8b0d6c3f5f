//! Rendering helpers shared across commands.

use crate::{
    stats::{
        rates, CareerRow, DefenseTotals, GameRow, LineIdentity, PassingTotals, ReceivingTotals,
        RushingTotals, SeasonRow,
    },
    storage::{DefenseLine, Game, PassingLine, ReceivingLine, RushingLine},
    Result,
};
use serde::Serialize;

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// One decimal, or `--` when the rate does not apply.
pub fn fmt_rate(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "--".to_string())
}

/// Sack totals are kept to half-sack precision.
pub fn fmt_sacks(sacks: f64) -> String {
    if sacks.fract() == 0.0 {
        format!("{sacks:.0}")
    } else {
        format!("{sacks:.1}")
    }
}

/// `W 45-27`, or `--` for a game without a final score.
pub fn fmt_score(game: &Game) -> String {
    match (game.result, game.saints_score, game.opponent_score) {
        (Some(result), Some(own), Some(opp)) => format!("{result} {own}-{opp}"),
        (None, Some(own), Some(opp)) => format!("{own}-{opp}"),
        _ => "--".to_string(),
    }
}

/// Left-aligned text table with a dashed rule under the header.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![format_row(&header), format_row(&rule)];
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}

/// Column headers and cells of a stat block.
pub trait StatCells {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl StatCells for PassingTotals {
    fn headers() -> &'static [&'static str] {
        &["G", "Att", "Cmp", "Pct", "Yds", "Y/A", "TD", "Int", "Rtg"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.games.to_string(),
            self.att.to_string(),
            self.com.to_string(),
            fmt_rate(self.pct),
            self.yds.to_string(),
            fmt_rate(self.ypa),
            self.td.to_string(),
            self.int_thrown.to_string(),
            fmt_rate(self.rating),
        ]
    }
}

impl StatCells for PassingLine {
    fn headers() -> &'static [&'static str] {
        &["Att", "Cmp", "Yds", "TD", "Int", "Sk", "Rtg"]
    }

    fn cells(&self) -> Vec<String> {
        let rating = self.rtg.or_else(|| {
            rates::passer_rating(self.att, self.com, self.yds, self.td, self.int_thrown)
        });
        vec![
            self.att.to_string(),
            self.com.to_string(),
            self.yds.to_string(),
            self.td.to_string(),
            self.int_thrown.to_string(),
            self.sacked.to_string(),
            fmt_rate(rating),
        ]
    }
}

impl StatCells for RushingTotals {
    fn headers() -> &'static [&'static str] {
        &["G", "Att", "Yds", "Avg", "TD", "Lg"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.games.to_string(),
            self.att.to_string(),
            self.yds.to_string(),
            fmt_rate(self.avg),
            self.td.to_string(),
            self.lg.to_string(),
        ]
    }
}

impl StatCells for RushingLine {
    fn headers() -> &'static [&'static str] {
        &["Att", "Yds", "Avg", "TD", "Lg"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.att.to_string(),
            self.yds.to_string(),
            fmt_rate(self.avg.or_else(|| rates::yards_per_attempt(self.yds, self.att))),
            self.td.to_string(),
            self.lg.to_string(),
        ]
    }
}

impl StatCells for ReceivingTotals {
    fn headers() -> &'static [&'static str] {
        &["G", "Tgt", "Rec", "Yds", "Avg", "TD", "Lg"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.games.to_string(),
            self.tar.to_string(),
            self.rec.to_string(),
            self.yds.to_string(),
            fmt_rate(self.avg),
            self.td.to_string(),
            self.lg.to_string(),
        ]
    }
}

impl StatCells for ReceivingLine {
    fn headers() -> &'static [&'static str] {
        &["Tgt", "Rec", "Yds", "Avg", "TD", "Lg"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.tar.to_string(),
            self.rec.to_string(),
            self.yds.to_string(),
            fmt_rate(self.avg.or_else(|| rates::yards_per_reception(self.yds, self.rec))),
            self.td.to_string(),
            self.lg.to_string(),
        ]
    }
}

impl StatCells for DefenseTotals {
    fn headers() -> &'static [&'static str] {
        &["G", "Tkl", "TFL", "QH", "PD", "FF", "Sk", "Int", "IntYds"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.games.to_string(),
            self.tkl.to_string(),
            self.tfl.to_string(),
            self.qh.to_string(),
            self.pd_count.to_string(),
            self.ff.to_string(),
            fmt_sacks(self.sacks),
            self.int_count.to_string(),
            self.int_yds.to_string(),
        ]
    }
}

impl StatCells for DefenseLine {
    fn headers() -> &'static [&'static str] {
        &["Tkl", "TFL", "QH", "PD", "FF", "Sk", "Int", "IntYds"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.tkl.to_string(),
            self.tfl.to_string(),
            self.qh.to_string(),
            self.pd_count.to_string(),
            self.ff.to_string(),
            fmt_sacks(self.sacks),
            self.int_count.to_string(),
            self.int_yds.to_string(),
        ]
    }
}

fn with_headers<T: StatCells>(leading: &[&'static str]) -> Vec<&'static str> {
    leading.iter().chain(T::headers()).copied().collect()
}

pub fn career_table<T: StatCells>(rows: &[CareerRow<T>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![
                (i + 1).to_string(),
                row.player_name.clone(),
                format!("{}-{}", row.first_season, row.last_season),
            ];
            cells.extend(row.stats.cells());
            cells
        })
        .collect();
    render_table(&with_headers::<T>(&["#", "Player", "Seasons"]), &cells)
}

pub fn season_table<T: StatCells>(rows: &[SeasonRow<T>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![
                (i + 1).to_string(),
                row.player_name.clone(),
                row.season.to_string(),
            ];
            cells.extend(row.stats.cells());
            cells
        })
        .collect();
    render_table(&with_headers::<T>(&["#", "Player", "Season"]), &cells)
}

pub fn game_table<L: StatCells + LineIdentity>(rows: &[GameRow<L>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![
                (i + 1).to_string(),
                row.line.player_name().to_string(),
                row.game.game_date.clone(),
                row.game.opponent.clone(),
            ];
            cells.extend(row.line.cells());
            cells
        })
        .collect();
    render_table(&with_headers::<L>(&["#", "Player", "Date", "Opponent"]), &cells)
}

/// Box score section: player name then the line's cells.
pub fn line_table<L: StatCells + LineIdentity>(lines: &[L]) -> String {
    let cells: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            let mut cells = vec![line.player_name().to_string()];
            cells.extend(line.cells());
            cells
        })
        .collect();
    render_table(&with_headers::<L>(&["Player"]), &cells)
}
