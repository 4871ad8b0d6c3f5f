//! Error types for the Saints statistics layer

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database not found at {}", path.display())]
    MissingDatabase { path: PathBuf },

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Invalid scope: {value} (expected career, season or game)")]
    InvalidScope { value: String },

    #[error("Invalid category: {value} (expected passing, rushing, receiving or defense)")]
    InvalidCategory { value: String },

    #[error("Invalid game type: {value} (expected regular, playoff or preseason)")]
    InvalidGameType { value: String },

    #[error("Invalid sort stat '{value}' for {category}")]
    InvalidSortStat { category: &'static str, value: String },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Background query failed: {0}")]
    Task(String),
}

impl StatsError {
    /// Shorthand for the "absent entity" outcome.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        StatsError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StatsError::NotFound { .. })
    }

    /// True for errors raised while validating caller input, before any query ran.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            StatsError::InvalidSeason { .. }
                | StatsError::InvalidScope { .. }
                | StatsError::InvalidCategory { .. }
                | StatsError::InvalidGameType { .. }
                | StatsError::InvalidSortStat { .. }
                | StatsError::InvalidParameter { .. }
        )
    }

    /// Short machine-readable label, used in tool-call error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            StatsError::NotFound { .. } => "not_found",
            e if e.is_invalid_parameter() => "invalid_parameter",
            StatsError::Database(_) | StatsError::MissingDatabase { .. } => "data_store",
            _ => "internal",
        }
    }
}

impl From<tokio::task::JoinError> for StatsError {
    fn from(err: tokio::task::JoinError) -> Self {
        StatsError::Task(err.to_string())
    }
}
