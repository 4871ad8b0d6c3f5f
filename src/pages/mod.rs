//! Page composition
//!
//! A page gathers several independent reads. Each read runs on the tokio
//! blocking pool with its own read-only connection; the page is assembled
//! once every read has finished, and the first failure aborts it.

use crate::cli::types::{Category, GameId, GameType, PlayerId, Scope, Season};
use crate::error::{Result, StatsError};
use crate::stats::{
    CareerRow, DefenseTotals, GameLogEntry, Leaderboard, LeaderboardKind, LeaderboardQuery,
    PassingTotals, ReceivingTotals, RushingTotals,
};
use crate::storage::{
    BoxScore, DraftPick, Game, Player, ScoringPlay, SeasonRecord, StatsDatabase, TeamGameStats,
    TeamSeasonTotals,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[cfg(test)]
mod tests;

/// Number of leaders per category on a season page.
pub const SEASON_LEADERS: u32 = 5;

/// Everything shown for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPage {
    pub player: Player,
    pub career_passing: Option<CareerRow<PassingTotals>>,
    pub career_rushing: Option<CareerRow<RushingTotals>>,
    pub career_receiving: Option<CareerRow<ReceivingTotals>>,
    pub career_defense: Option<CareerRow<DefenseTotals>>,
    pub game_log: Vec<GameLogEntry>,
    pub draft_picks: Vec<DraftPick>,
}

/// Top regular-season performers of one season, per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonLeaders {
    pub passing: Leaderboard,
    pub rushing: Leaderboard,
    pub receiving: Leaderboard,
    pub defense: Leaderboard,
}

/// Everything shown for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPage {
    pub season: Season,
    /// Every game of the season, all game types, by date.
    pub games: Vec<Game>,
    /// Regular-season record; `None` for a season with no regular-season games.
    pub record: Option<SeasonRecord>,
    pub playoff_record: Option<SeasonRecord>,
    pub regular_totals: Vec<TeamSeasonTotals>,
    pub playoff_totals: Vec<TeamSeasonTotals>,
    pub leaders: SeasonLeaders,
}

/// Everything shown for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePage {
    pub game: Game,
    pub team_stats: Vec<TeamGameStats>,
    pub scoring_plays: Vec<ScoringPlay>,
    pub box_score: BoxScore,
}

/// Composes pages from a database file, one connection per read.
#[derive(Debug, Clone)]
pub struct PageComposer {
    path: Arc<PathBuf>,
}

impl PageComposer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Run one read on the blocking pool against a fresh read-only connection.
    pub async fn query<T, F>(&self, read: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&StatsDatabase) -> Result<T> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let db = StatsDatabase::open(path.as_path())?;
            read(&db)
        })
        .await?
    }

    /// Profile, career totals in every category, game log and draft history.
    pub async fn player(&self, player_id: &PlayerId) -> Result<PlayerPage> {
        info!(player_id = %player_id, "composing player page");

        let career = |category: Category| {
            let id = player_id.clone();
            move |db: &StatsDatabase| {
                let kind = LeaderboardKind::new(Scope::Career, category, None)?;
                db.leaderboard(&LeaderboardQuery::new(kind).player(id))
            }
        };

        let id = player_id.clone();
        let profile = self.query(move |db| db.get_player(&id));
        let passing = self.query(career(Category::Passing));
        let rushing = self.query(career(Category::Rushing));
        let receiving = self.query(career(Category::Receiving));
        let defense = self.query(career(Category::Defense));
        let id = player_id.clone();
        let game_log = self.query(move |db| match db.player_game_log(&id, None) {
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            other => other,
        });
        let id = player_id.clone();
        let draft_picks = self.query(move |db| db.player_draft_picks(&id));

        let (profile, passing, rushing, receiving, defense, game_log, draft_picks) = tokio::try_join!(
            profile,
            passing,
            rushing,
            receiving,
            defense,
            game_log,
            draft_picks
        )?;

        let player = profile.ok_or_else(|| StatsError::not_found("Player", player_id))?;
        Ok(PlayerPage {
            player,
            career_passing: match passing {
                Leaderboard::CareerPassing(rows) => rows.into_iter().next(),
                _ => None,
            },
            career_rushing: match rushing {
                Leaderboard::CareerRushing(rows) => rows.into_iter().next(),
                _ => None,
            },
            career_receiving: match receiving {
                Leaderboard::CareerReceiving(rows) => rows.into_iter().next(),
                _ => None,
            },
            career_defense: match defense {
                Leaderboard::CareerDefense(rows) => rows.into_iter().next(),
                _ => None,
            },
            game_log,
            draft_picks,
        })
    }

    /// Games, records, team totals and leaders of one season.
    pub async fn season(&self, season: Season) -> Result<SeasonPage> {
        info!(%season, "composing season page");

        let leaders = |category: Category| {
            move |db: &StatsDatabase| {
                let kind = LeaderboardKind::new(Scope::Season, category, None)?;
                db.leaderboard(
                    &LeaderboardQuery::new(kind)
                        .season(season)
                        .limit(SEASON_LEADERS),
                )
            }
        };

        let (
            exists,
            games,
            record,
            playoff_record,
            regular_totals,
            playoff_totals,
            passing,
            rushing,
            receiving,
            defense,
        ) = tokio::try_join!(
            self.query(move |db| db.season_exists(season)),
            self.query(move |db| db.season_games(season, None)),
            self.query(move |db| db.season_record(season, GameType::Regular)),
            self.query(move |db| db.season_record(season, GameType::Playoff)),
            self.query(move |db| db.season_team_totals(season, GameType::Regular)),
            self.query(move |db| db.season_team_totals(season, GameType::Playoff)),
            self.query(leaders(Category::Passing)),
            self.query(leaders(Category::Rushing)),
            self.query(leaders(Category::Receiving)),
            self.query(leaders(Category::Defense)),
        )?;

        if !exists {
            return Err(StatsError::not_found("Season", season));
        }

        Ok(SeasonPage {
            season,
            games,
            record,
            playoff_record,
            regular_totals,
            playoff_totals,
            leaders: SeasonLeaders {
                passing,
                rushing,
                receiving,
                defense,
            },
        })
    }

    /// Game details, team stats, scoring plays and box score.
    pub async fn game(&self, game_id: &GameId) -> Result<GamePage> {
        info!(game_id = %game_id, "composing game page");

        let (id_a, id_b, id_c, id_d) = (
            game_id.clone(),
            game_id.clone(),
            game_id.clone(),
            game_id.clone(),
        );
        let (game, team_stats, scoring_plays, box_score) = tokio::try_join!(
            self.query(move |db| db.get_game(&id_a)),
            self.query(move |db| db.team_game_stats(&id_b)),
            self.query(move |db| db.scoring_plays(&id_c)),
            self.query(move |db| db.box_score(&id_d)),
        )?;

        let game = game.ok_or_else(|| StatsError::not_found("Game", game_id))?;
        Ok(GamePage {
            game,
            team_stats,
            scoring_plays,
            box_score,
        })
    }
}
