//! Player search, player page and game log commands.

use super::common::{career_table, fmt_rate, print_json, render_table};
use crate::{
    cli::types::{PlayerId, Season},
    pages::{PageComposer, PlayerPage},
    stats::{rates, GameLogEntry},
    storage::{PlayerSummary, StatsDatabase},
    Result,
};
use std::path::Path;

/// Search the player directory by name fragment.
pub fn handle_search(db_path: &Path, name: &str, limit: Option<u32>, as_json: bool) -> Result<()> {
    let db = StatsDatabase::open(db_path)?;
    let players = db.search_players(name, limit)?;

    if as_json {
        return print_json(&players);
    }

    // tarpaulin::skip - console output
    if players.is_empty() {
        println!("No players match '{name}'.");
    } else {
        println!("{}", render_search(&players));
    }
    Ok(())
}

pub fn render_search(players: &[PlayerSummary]) -> String {
    let rows: Vec<Vec<String>> = players
        .iter()
        .map(|p| {
            let span = match (p.first_season, p.last_season) {
                (Some(first), Some(last)) if first == last => first.to_string(),
                (Some(first), Some(last)) => format!("{first}-{last}"),
                _ => "--".to_string(),
            };
            vec![
                p.player_id.to_string(),
                p.player_name.clone(),
                p.position.clone().unwrap_or_default(),
                span,
            ]
        })
        .collect();
    render_table(&["Id", "Player", "Pos", "Seasons"], &rows)
}

/// Show the composed player page.
pub async fn handle_player(db_path: &Path, player_id: &PlayerId, as_json: bool) -> Result<()> {
    let page = PageComposer::new(db_path).player(player_id).await?;

    if as_json {
        return print_json(&page);
    }

    println!("{}", render_player(&page)); // tarpaulin::skip
    Ok(())
}

pub fn render_player(page: &PlayerPage) -> String {
    let player = &page.player;
    let mut out = vec![format!("{} ({})", player.player_name, player.player_id)];

    let bio: Vec<String> = [
        player.position.clone(),
        player.college.clone(),
        player.height.clone(),
        player.weight.map(|w| format!("{w} lb")),
        player.birth_date.as_ref().map(|d| format!("born {d}")),
        player.seasons_text.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !bio.is_empty() {
        out.push(bio.join(" | "));
    }

    let mut section = |title: &str, table: String| {
        out.push(String::new());
        out.push(title.to_string());
        out.push(table);
    };
    if let Some(row) = &page.career_passing {
        section("Passing", career_table(std::slice::from_ref(row)));
    }
    if let Some(row) = &page.career_rushing {
        section("Rushing", career_table(std::slice::from_ref(row)));
    }
    if let Some(row) = &page.career_receiving {
        section("Receiving", career_table(std::slice::from_ref(row)));
    }
    if let Some(row) = &page.career_defense {
        section("Defense", career_table(std::slice::from_ref(row)));
    }
    if !page.game_log.is_empty() {
        section("Game log", render_game_log(&page.game_log));
    }
    for pick in &page.draft_picks {
        out.push(String::new());
        out.push(format!(
            "Drafted {} round {}, pick {}",
            pick.season, pick.round, pick.pick
        ));
    }
    out.join("\n")
}

/// Show one player's game log.
pub fn handle_game_log(
    db_path: &Path,
    player_id: &PlayerId,
    season: Option<Season>,
    as_json: bool,
) -> Result<()> {
    let db = StatsDatabase::open(db_path)?;
    let games = db.player_game_log(player_id, season)?;

    if as_json {
        return print_json(&games);
    }

    // tarpaulin::skip - console output
    if games.is_empty() {
        println!("No games recorded.");
    } else {
        println!("{}", render_game_log(&games));
    }
    Ok(())
}

/// One row per game; a category the player did not record is left blank.
pub fn render_game_log(games: &[GameLogEntry]) -> String {
    let headers = [
        "Date", "Opponent", "", "Result", "Cmp/Att", "PYds", "PTD", "Int", "Rtg", "Rush", "RYds",
        "RTD", "Rec", "ReYds", "ReTD",
    ];
    let blank = |n: usize| vec![String::new(); n];

    let rows: Vec<Vec<String>> = games
        .iter()
        .map(|entry| {
            let result = match (entry.result, entry.saints_score, entry.opponent_score) {
                (Some(result), Some(own), Some(opp)) => format!("{result} {own}-{opp}"),
                _ => "--".to_string(),
            };
            let mut cells = vec![
                entry.game.game_date.clone(),
                entry.game.opponent.clone(),
                if entry.home_away == "away" { "@" } else { "vs" }.to_string(),
                result,
            ];
            cells.extend(match &entry.passing {
                Some(p) => vec![
                    format!("{}/{}", p.com, p.att),
                    p.yds.to_string(),
                    p.td.to_string(),
                    p.int_thrown.to_string(),
                    fmt_rate(p.rtg.or_else(|| {
                        rates::passer_rating(p.att, p.com, p.yds, p.td, p.int_thrown)
                    })),
                ],
                None => blank(5),
            });
            cells.extend(match &entry.rushing {
                Some(r) => vec![r.att.to_string(), r.yds.to_string(), r.td.to_string()],
                None => blank(3),
            });
            cells.extend(match &entry.receiving {
                Some(r) => vec![r.rec.to_string(), r.yds.to_string(), r.td.to_string()],
                None => blank(3),
            });
            cells
        })
        .collect();
    render_table(&headers, &rows)
}
