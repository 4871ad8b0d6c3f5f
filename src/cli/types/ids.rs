//! Identifier types for players and games.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player identifiers.
///
/// Player ids are the opaque text keys assigned by the upstream data
/// collection (e.g. `"BreeDr00"`), shared by every per-category stat table.
///
/// # Examples
///
/// ```rust
/// use saints_stats::PlayerId;
///
/// let id = PlayerId::new("BreeDr00");
/// assert_eq!(id.as_str(), "BreeDr00");
/// assert_eq!(id.to_string(), "BreeDr00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::InvalidParameter {
                name: "player_id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for game identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::InvalidParameter {
                name: "game_id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_parse_trims() {
        let id: PlayerId = "  BreeDr00 ".parse().unwrap();
        assert_eq!(id, PlayerId::new("BreeDr00"));
    }

    #[test]
    fn test_empty_ids_rejected() {
        assert!("".parse::<PlayerId>().is_err());
        assert!("   ".parse::<GameId>().is_err());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&GameId::new("200909130nor")).unwrap();
        assert_eq!(json, "\"200909130nor\"");
    }
}
