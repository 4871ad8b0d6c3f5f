//! Game page command.

use super::common::{fmt_sacks, fmt_score, line_table, print_json, render_table};
use crate::{
    cli::types::GameId,
    pages::{GamePage, PageComposer},
    Result,
};
use std::path::Path;

pub async fn handle_game(db_path: &Path, game_id: &GameId, as_json: bool) -> Result<()> {
    let page = PageComposer::new(db_path).game(game_id).await?;

    if as_json {
        return print_json(&page);
    }

    println!("{}", render_game(&page)); // tarpaulin::skip
    Ok(())
}

pub fn render_game(page: &GamePage) -> String {
    let game = &page.game;
    let at = if game.home_away == "away" { "@" } else { "vs" };
    let mut out = vec![format!(
        "{} ({}) {} {}  {}",
        game.game_date,
        game.game_type,
        at,
        game.opponent,
        fmt_score(game)
    )];
    if let Some(venue) = &game.venue {
        let mut line = venue.clone();
        if let Some(attendance) = game.attendance {
            line.push_str(&format!(", attendance {attendance}"));
        }
        out.push(line);
    }

    if !page.team_stats.is_empty() {
        let rows: Vec<Vec<String>> = page
            .team_stats
            .iter()
            .map(|t| {
                vec![
                    t.team.clone(),
                    t.total_points.map(|p| p.to_string()).unwrap_or_default(),
                    format!("{}/{}", t.pass_com, t.pass_att),
                    t.pass_yds.to_string(),
                    t.rush_att.to_string(),
                    t.rush_yds.to_string(),
                    t.interceptions.to_string(),
                    fmt_sacks(t.sacks),
                ]
            })
            .collect();
        out.push(String::new());
        out.push(render_table(
            &["Team", "Pts", "Cmp/Att", "PYds", "Rush", "RYds", "Int", "Sk"],
            &rows,
        ));
    }

    if !page.scoring_plays.is_empty() {
        out.push(String::new());
        out.push("Scoring".to_string());
        for play in &page.scoring_plays {
            let quarter = play.quarter.map(|q| format!("Q{q}")).unwrap_or_default();
            let score = match (play.saints_score, play.opp_score) {
                (Some(own), Some(opp)) => format!("{own}-{opp}"),
                _ => String::new(),
            };
            out.push(
                format!(
                    "{quarter:<3} {}  {score}",
                    play.description.as_deref().unwrap_or("")
                )
                .trim_end()
                .to_string(),
            );
        }
    }

    let box_score = &page.box_score;
    if !box_score.passing.is_empty() {
        out.push(String::new());
        out.push(line_table(&box_score.passing));
    }
    if !box_score.rushing.is_empty() {
        out.push(String::new());
        out.push(line_table(&box_score.rushing));
    }
    if !box_score.receiving.is_empty() {
        out.push(String::new());
        out.push(line_table(&box_score.receiving));
    }
    if !box_score.defense.is_empty() {
        out.push(String::new());
        out.push(line_table(&box_score.defense));
    }
    out.join("\n")
}
