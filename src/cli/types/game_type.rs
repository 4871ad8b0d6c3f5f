//! Game type partition and game results.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three-way partition of every game in the dataset.
///
/// Leaderboards and summaries count [`GameType::Regular`] games unless the
/// caller explicitly asks for postseason or preseason.
///
/// # Examples
///
/// ```rust
/// use saints_stats::GameType;
///
/// let gt: GameType = "postseason".parse().unwrap();
/// assert_eq!(gt, GameType::Playoff);
/// assert_eq!(GameType::default().as_str(), "regular");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Regular,
    #[value(alias = "postseason")]
    Playoff,
    Preseason,
}

impl GameType {
    pub const ALL: [GameType; 3] = [GameType::Regular, GameType::Playoff, GameType::Preseason];

    /// Value stored in `games.game_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Regular => "regular",
            GameType::Playoff => "playoff",
            GameType::Preseason => "preseason",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "reg" => Ok(GameType::Regular),
            "playoff" | "playoffs" | "postseason" | "post" => Ok(GameType::Playoff),
            "preseason" | "pre" => Ok(GameType::Preseason),
            _ => Err(StatsError::InvalidGameType {
                value: s.to_string(),
            }),
        }
    }
}

/// Outcome of a completed game from the franchise's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "T")]
    Tie,
}

impl GameResult {
    /// Parse the single-letter code stored in `games.result`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "W" | "w" => Some(GameResult::Win),
            "L" | "l" => Some(GameResult::Loss),
            "T" | "t" => Some(GameResult::Tie),
            _ => None,
        }
    }

    /// Result implied by a final score.
    pub fn from_scores(franchise: i64, opponent: i64) -> Self {
        match franchise.cmp(&opponent) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::Loss,
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
            GameResult::Tie => "T",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_type_round_trip_strings() {
        for gt in GameType::ALL {
            assert_eq!(gt.as_str().parse::<GameType>().unwrap(), gt);
        }
    }

    #[test]
    fn test_game_type_aliases() {
        assert_eq!("Postseason".parse::<GameType>().unwrap(), GameType::Playoff);
        assert_eq!("PRE".parse::<GameType>().unwrap(), GameType::Preseason);
        assert!(matches!(
            "exhibition".parse::<GameType>(),
            Err(StatsError::InvalidGameType { .. })
        ));
    }

    #[test]
    fn test_game_result_from_scores() {
        assert_eq!(GameResult::from_scores(31, 17), GameResult::Win);
        assert_eq!(GameResult::from_scores(10, 13), GameResult::Loss);
        assert_eq!(GameResult::from_scores(20, 20), GameResult::Tie);
    }

    #[test]
    fn test_game_result_codes() {
        assert_eq!(GameResult::from_code("W"), Some(GameResult::Win));
        assert_eq!(GameResult::from_code(""), None);
        assert_eq!(GameResult::Tie.to_string(), "T");
        assert_eq!(serde_json::to_string(&GameResult::Loss).unwrap(), "\"L\"");
    }
}
