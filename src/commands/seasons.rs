//! Season page and season list commands.

use super::{
    common::{fmt_sacks, fmt_score, print_json, render_table},
    leaders::render_leaderboard,
};
use crate::{
    cli::types::{GameType, Season},
    pages::{PageComposer, SeasonPage},
    storage::{SeasonRecord, StatsDatabase, TeamSeasonTotals, TeamSide},
    Result,
};
use std::path::Path;

pub async fn handle_season(db_path: &Path, season: Season, as_json: bool) -> Result<()> {
    let page = PageComposer::new(db_path).season(season).await?;

    if as_json {
        return print_json(&page);
    }

    println!("{}", render_season(&page)); // tarpaulin::skip
    Ok(())
}

fn fmt_record(record: &SeasonRecord) -> String {
    if record.ties > 0 {
        format!("{}-{}-{}", record.wins, record.losses, record.ties)
    } else {
        format!("{}-{}", record.wins, record.losses)
    }
}

fn totals_table(totals: &[TeamSeasonTotals]) -> String {
    let rows: Vec<Vec<String>> = totals
        .iter()
        .map(|t| {
            vec![
                match t.side {
                    TeamSide::Franchise => "Saints".to_string(),
                    TeamSide::Opponents => "Opponents".to_string(),
                },
                t.games.to_string(),
                t.total_points.to_string(),
                t.pass_yds.to_string(),
                t.pass_td.to_string(),
                t.rush_yds.to_string(),
                t.rush_td.to_string(),
                t.interceptions.to_string(),
                fmt_sacks(t.sacks),
            ]
        })
        .collect();
    render_table(
        &["", "G", "Pts", "PYds", "PTD", "RYds", "RTD", "Int", "Sk"],
        &rows,
    )
}

pub fn render_season(page: &SeasonPage) -> String {
    let mut out = vec![format!("{} New Orleans Saints", page.season)];
    if let Some(record) = &page.record {
        let mut line = format!("Record: {}", fmt_record(record));
        if let Some(playoffs) = &page.playoff_record {
            line.push_str(&format!(" (playoffs {})", fmt_record(playoffs)));
        }
        out.push(line);
    }

    let games: Vec<Vec<String>> = page
        .games
        .iter()
        .map(|g| {
            vec![
                g.game_date.clone(),
                g.game_type.to_string(),
                if g.home_away == "away" { "@" } else { "vs" }.to_string(),
                g.opponent.clone(),
                fmt_score(g),
            ]
        })
        .collect();
    out.push(String::new());
    out.push(render_table(&["Date", "Type", "", "Opponent", "Result"], &games));

    if !page.regular_totals.is_empty() {
        out.push(String::new());
        out.push("Team totals".to_string());
        out.push(totals_table(&page.regular_totals));
    }
    if !page.playoff_totals.is_empty() {
        out.push(String::new());
        out.push("Playoff totals".to_string());
        out.push(totals_table(&page.playoff_totals));
    }

    for (title, board) in [
        ("Passing leaders", &page.leaders.passing),
        ("Rushing leaders", &page.leaders.rushing),
        ("Receiving leaders", &page.leaders.receiving),
        ("Defensive leaders", &page.leaders.defense),
    ] {
        if !board.is_empty() {
            out.push(String::new());
            out.push(title.to_string());
            out.push(render_leaderboard(board));
        }
    }
    out.join("\n")
}

/// Record of every season for one game type.
pub fn handle_seasons(db_path: &Path, game_type: GameType, as_json: bool) -> Result<()> {
    let db = StatsDatabase::open(db_path)?;
    let seasons = db.list_seasons(game_type)?;

    if as_json {
        return print_json(&seasons);
    }

    println!("{}", render_seasons(&seasons)); // tarpaulin::skip
    Ok(())
}

pub fn render_seasons(seasons: &[SeasonRecord]) -> String {
    let rows: Vec<Vec<String>> = seasons
        .iter()
        .map(|r| {
            vec![
                r.season.to_string(),
                fmt_record(r),
                r.points_for.to_string(),
                r.points_against.to_string(),
            ]
        })
        .collect();
    render_table(&["Season", "Record", "PF", "PA"], &rows)
}
