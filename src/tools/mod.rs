//! Tool-call surface for the chat assistant.
//!
//! The assistant sends `{"name": ..., "arguments": {...}}`; the result is a
//! JSON value it can read back. Absent entities and bad arguments are reported
//! inside the payload as `{"error": {"kind", "message"}}` so the model can
//! recover; data-store failures are returned as errors.

use crate::cli::types::{Category, GameId, GameType, PlayerId, Scope, Season};
use crate::error::{Result, StatsError};
use crate::pages::PageComposer;
use crate::stats::{LeaderboardKind, LeaderboardQuery};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Hard cap on rows returned to the assistant.
pub const MAX_TOOL_ROWS: u32 = 100;

const DEFAULT_TOOL_ROWS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPlayersArgs {
    pub query: String,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Leaderboard arguments arrive as loose strings and are validated into typed
/// parameters before any query runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardArgs {
    pub scope: String,
    pub category: String,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub season: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogArgs {
    pub player_id: String,
    #[serde(default)]
    pub season: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerArgs {
    pub player_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonArgs {
    pub season: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameArgs {
    pub game_id: String,
}

/// One tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "arguments", rename_all = "snake_case")]
pub enum ToolCall {
    SearchPlayers(SearchPlayersArgs),
    GetLeaderboard(LeaderboardArgs),
    GetPlayerGameLog(GameLogArgs),
    GetPlayerProfile(PlayerArgs),
    GetSeason(SeasonArgs),
    GetGame(GameArgs),
    GetDraftClass(SeasonArgs),
}

impl ToolCall {
    /// Parse a raw tool call; unknown tools and malformed arguments are
    /// invalid parameters.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| StatsError::InvalidParameter {
            name: "tool_call",
            reason: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| StatsError::InvalidParameter {
            name: "tool_call",
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::SearchPlayers(_) => "search_players",
            ToolCall::GetLeaderboard(_) => "get_leaderboard",
            ToolCall::GetPlayerGameLog(_) => "get_player_game_log",
            ToolCall::GetPlayerProfile(_) => "get_player_profile",
            ToolCall::GetSeason(_) => "get_season",
            ToolCall::GetGame(_) => "get_game",
            ToolCall::GetDraftClass(_) => "get_draft_class",
        }
    }
}

fn row_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_TOOL_ROWS).min(MAX_TOOL_ROWS)
}

fn player_id(raw: &str) -> Result<PlayerId> {
    raw.parse()
}

impl LeaderboardArgs {
    /// Validate into a typed leaderboard query.
    pub fn to_query(&self) -> Result<LeaderboardQuery> {
        let scope: Scope = self.scope.parse()?;
        let category: Category = self.category.parse()?;
        let kind = LeaderboardKind::new(scope, category, self.sort_by.as_deref())?;

        let mut query = LeaderboardQuery::new(kind).limit(row_limit(self.limit));
        if let Some(game_type) = &self.game_type {
            query = query.game_type(game_type.parse::<GameType>()?);
        }
        if let Some(id) = &self.player_id {
            query = query.player(player_id(id)?);
        }
        if let Some(season) = self.season {
            query = query.season(Season::try_from_i64(season)?);
        }
        query.validate()?;
        Ok(query)
    }
}

/// Error payload for outcomes the assistant should see; `None` for failures
/// that must propagate.
fn error_payload(err: &StatsError) -> Option<Value> {
    if err.is_not_found() || err.is_invalid_parameter() {
        Some(json!({ "error": { "kind": err.kind(), "message": err.to_string() } }))
    } else {
        None
    }
}

/// Execute one tool call against the database behind `pages`.
pub async fn execute(pages: &PageComposer, call: ToolCall) -> Result<Value> {
    let name = call.name();
    debug!(tool = name, "executing tool call");

    match run(pages, call).await {
        Ok(value) => Ok(value),
        Err(err) => match error_payload(&err) {
            Some(payload) => {
                debug!(tool = name, error = %err, "tool call reported an error to the caller");
                Ok(payload)
            }
            None => {
                warn!(tool = name, error = %err, "tool call failed");
                Err(err)
            }
        },
    }
}

/// Parse and execute a raw JSON tool call.
pub async fn execute_json(pages: &PageComposer, raw: &str) -> Result<Value> {
    match ToolCall::from_json(raw) {
        Ok(call) => execute(pages, call).await,
        Err(err) => error_payload(&err).ok_or(err),
    }
}

async fn run(pages: &PageComposer, call: ToolCall) -> Result<Value> {
    match call {
        ToolCall::SearchPlayers(args) => {
            let limit = row_limit(args.limit);
            let players = pages
                .query(move |db| db.search_players(&args.query, Some(limit)))
                .await?;
            Ok(json!({ "players": players }))
        }
        ToolCall::GetLeaderboard(args) => {
            let query = args.to_query()?;
            let board = pages.query(move |db| db.leaderboard(&query)).await?;
            Ok(serde_json::to_value(board)?)
        }
        ToolCall::GetPlayerGameLog(args) => {
            let id = player_id(&args.player_id)?;
            let season = args.season.map(Season::try_from_i64).transpose()?;
            let games = pages
                .query(move |db| db.player_game_log(&id, season))
                .await?;
            Ok(json!({ "games": games }))
        }
        ToolCall::GetPlayerProfile(args) => {
            let id = player_id(&args.player_id)?;
            Ok(serde_json::to_value(pages.player(&id).await?)?)
        }
        ToolCall::GetSeason(args) => {
            let season = Season::try_from_i64(args.season)?;
            Ok(serde_json::to_value(pages.season(season).await?)?)
        }
        ToolCall::GetGame(args) => {
            let id: GameId = args.game_id.parse()?;
            Ok(serde_json::to_value(pages.game(&id).await?)?)
        }
        ToolCall::GetDraftClass(args) => {
            let year = Season::try_from_i64(args.season)?;
            let picks = pages
                .query(move |db| {
                    if !db.draft_year_exists(year)? {
                        return Err(StatsError::not_found("Draft year", year));
                    }
                    db.draft_class(year)
                })
                .await?;
            Ok(json!({ "season": year, "picks": picks }))
        }
    }
}

/// Descriptions and JSON input schemas of every tool, in the format the chat
/// provider expects.
pub fn tool_definitions() -> Value {
    json!([
        {
            "name": "search_players",
            "description": "Find Saints players whose name contains the query (case-insensitive). Returns player ids and the span of seasons they played.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Part of the player's name" },
                    "limit": { "type": "integer", "minimum": 1, "maximum": MAX_TOOL_ROWS }
                },
                "required": ["query"]
            }
        },
        {
            "name": "get_leaderboard",
            "description": "Rank Saints players by a statistic for a career, a season or a single game.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "scope": { "type": "string", "enum": ["career", "season", "game"] },
                    "category": { "type": "string", "enum": ["passing", "rushing", "receiving", "defense"] },
                    "game_type": { "type": "string", "enum": ["regular", "playoff", "preseason"], "default": "regular" },
                    "sort_by": {
                        "type": "string",
                        "description": "passing: yds, td, att, com, int, games, rating; rushing: yds, td, att, games, long; receiving: yds, td, rec, tar, games, long; defense: sacks, tkl, tfl, qh, pd, ff, int, games"
                    },
                    "limit": { "type": "integer", "minimum": 1, "maximum": MAX_TOOL_ROWS },
                    "player_id": { "type": "string" },
                    "season": { "type": "integer", "description": "Only for season or game scope" }
                },
                "required": ["scope", "category"]
            }
        },
        {
            "name": "get_player_game_log",
            "description": "Game-by-game passing, rushing and receiving lines of one player (regular season and playoffs).",
            "input_schema": {
                "type": "object",
                "properties": {
                    "player_id": { "type": "string" },
                    "season": { "type": "integer" }
                },
                "required": ["player_id"]
            }
        },
        {
            "name": "get_player_profile",
            "description": "Biography, career totals in every category, game log and draft history of one player.",
            "input_schema": {
                "type": "object",
                "properties": { "player_id": { "type": "string" } },
                "required": ["player_id"]
            }
        },
        {
            "name": "get_season",
            "description": "Schedule, results, team totals and top players of one Saints season.",
            "input_schema": {
                "type": "object",
                "properties": { "season": { "type": "integer" } },
                "required": ["season"]
            }
        },
        {
            "name": "get_game",
            "description": "Result, team stats, scoring plays and box score of one game.",
            "input_schema": {
                "type": "object",
                "properties": { "game_id": { "type": "string" } },
                "required": ["game_id"]
            }
        },
        {
            "name": "get_draft_class",
            "description": "Every Saints draft pick of one year, linked to player ids where known.",
            "input_schema": {
                "type": "object",
                "properties": { "season": { "type": "integer" } },
                "required": ["season"]
            }
        }
    ])
}
