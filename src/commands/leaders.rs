//! Leaderboard command implementation

use super::common::{career_table, game_table, print_json, season_table};
use crate::{
    cli::types::{Category, GameType, PlayerId, Scope, Season},
    stats::{Leaderboard, LeaderboardKind, LeaderboardQuery},
    storage::StatsDatabase,
    Result,
};
use std::path::PathBuf;

/// Parameters for the leaders command
#[derive(Debug, Clone)]
pub struct LeadersParams {
    pub db_path: PathBuf,
    pub scope: Scope,
    pub category: Category,
    pub game_type: GameType,
    pub sort: Option<String>,
    pub limit: u32,
    pub player: Option<PlayerId>,
    pub season: Option<Season>,
    pub as_json: bool,
}

impl LeadersParams {
    /// Build the typed query; rejects bad sort stats and season filters
    /// before the database is touched.
    pub fn to_query(&self) -> Result<LeaderboardQuery> {
        let kind = LeaderboardKind::new(self.scope, self.category, self.sort.as_deref())?;
        let mut query = LeaderboardQuery::new(kind)
            .game_type(self.game_type)
            .limit(self.limit);
        if let Some(player) = &self.player {
            query = query.player(player.clone());
        }
        if let Some(season) = self.season {
            query = query.season(season);
        }
        query.validate()?;
        Ok(query)
    }
}

/// Handle the leaders command
pub fn handle_leaders(params: LeadersParams) -> Result<()> {
    let query = params.to_query()?;
    let db = StatsDatabase::open(&params.db_path)?;
    let board = db.leaderboard(&query)?;

    if params.as_json {
        return print_json(&board);
    }

    // tarpaulin::skip - console output
    println!(
        "{} {} leaders ({})",
        params.scope, params.category, params.game_type
    );
    println!();
    if board.is_empty() {
        println!("No rows.");
    } else {
        println!("{}", render_leaderboard(&board));
    }
    Ok(())
}

/// Text table for any of the twelve leaderboards.
pub fn render_leaderboard(board: &Leaderboard) -> String {
    match board {
        Leaderboard::CareerPassing(rows) => career_table(rows),
        Leaderboard::SeasonPassing(rows) => season_table(rows),
        Leaderboard::GamePassing(rows) => game_table(rows),
        Leaderboard::CareerRushing(rows) => career_table(rows),
        Leaderboard::SeasonRushing(rows) => season_table(rows),
        Leaderboard::GameRushing(rows) => game_table(rows),
        Leaderboard::CareerReceiving(rows) => career_table(rows),
        Leaderboard::SeasonReceiving(rows) => season_table(rows),
        Leaderboard::GameReceiving(rows) => game_table(rows),
        Leaderboard::CareerDefense(rows) => career_table(rows),
        Leaderboard::SeasonDefense(rows) => season_table(rows),
        Leaderboard::GameDefense(rows) => game_table(rows),
    }
}
