//! Draft class command.

use super::common::{print_json, render_table};
use crate::{
    cli::types::Season,
    error::StatsError,
    storage::{DraftPick, StatsDatabase},
    Result,
};
use std::path::Path;

pub fn handle_draft(db_path: &Path, year: Season, as_json: bool) -> Result<()> {
    let db = StatsDatabase::open(db_path)?;
    if !db.draft_year_exists(year)? {
        return Err(StatsError::not_found("Draft year", year));
    }
    let picks = db.draft_class(year)?;

    if as_json {
        return print_json(&picks);
    }

    println!("{}", render_draft(&picks)); // tarpaulin::skip
    Ok(())
}

pub fn render_draft(picks: &[DraftPick]) -> String {
    let rows: Vec<Vec<String>> = picks
        .iter()
        .map(|p| {
            vec![
                p.round.to_string(),
                p.pick.to_string(),
                p.player_name.clone(),
                p.position.clone().unwrap_or_default(),
                p.college.clone().unwrap_or_default(),
                p.linked_player_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    render_table(&["Rnd", "Pick", "Player", "Pos", "College", "Id"], &rows)
}
