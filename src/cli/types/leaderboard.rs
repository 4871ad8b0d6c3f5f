//! Leaderboard scope, category and per-category sort stats.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation granularity of a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Sum across every game of a player's career.
    Career,
    /// Sum across the games of one season, one row per (player, season).
    Season,
    /// Single-game lines, unaggregated.
    Game,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Career => "career",
            Scope::Season => "season",
            Scope::Game => "game",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scope {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "career" => Ok(Scope::Career),
            "season" => Ok(Scope::Season),
            "game" | "single-game" | "single_game" => Ok(Scope::Game),
            _ => Err(StatsError::InvalidScope {
                value: s.to_string(),
            }),
        }
    }
}

/// Statistical domain of a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Passing,
    Rushing,
    Receiving,
    Defense,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Passing,
        Category::Rushing,
        Category::Receiving,
        Category::Defense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Passing => "passing",
            Category::Rushing => "rushing",
            Category::Receiving => "receiving",
            Category::Defense => "defense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passing" | "pass" => Ok(Category::Passing),
            "rushing" | "rush" => Ok(Category::Rushing),
            "receiving" | "rec" => Ok(Category::Receiving),
            "defense" | "defence" | "def" => Ok(Category::Defense),
            _ => Err(StatsError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Sortable passing stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassingStat {
    #[default]
    Yds,
    Td,
    Att,
    Com,
    Int,
    Games,
    Rating,
}

impl FromStr for PassingStat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yds" | "yards" => Ok(PassingStat::Yds),
            "td" | "tds" => Ok(PassingStat::Td),
            "att" => Ok(PassingStat::Att),
            "com" | "cmp" => Ok(PassingStat::Com),
            "int" | "int_thrown" => Ok(PassingStat::Int),
            "games" | "g" => Ok(PassingStat::Games),
            "rating" | "rtg" => Ok(PassingStat::Rating),
            _ => Err(StatsError::InvalidSortStat {
                category: "passing",
                value: s.to_string(),
            }),
        }
    }
}

/// Sortable rushing stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RushingStat {
    #[default]
    Yds,
    Td,
    Att,
    Games,
    Long,
}

impl FromStr for RushingStat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yds" | "yards" => Ok(RushingStat::Yds),
            "td" | "tds" => Ok(RushingStat::Td),
            "att" => Ok(RushingStat::Att),
            "games" | "g" => Ok(RushingStat::Games),
            "long" | "lg" => Ok(RushingStat::Long),
            _ => Err(StatsError::InvalidSortStat {
                category: "rushing",
                value: s.to_string(),
            }),
        }
    }
}

/// Sortable receiving stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceivingStat {
    #[default]
    Yds,
    Td,
    Rec,
    Tar,
    Games,
    Long,
}

impl FromStr for ReceivingStat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yds" | "yards" => Ok(ReceivingStat::Yds),
            "td" | "tds" => Ok(ReceivingStat::Td),
            "rec" | "receptions" => Ok(ReceivingStat::Rec),
            "tar" | "targets" => Ok(ReceivingStat::Tar),
            "games" | "g" => Ok(ReceivingStat::Games),
            "long" | "lg" => Ok(ReceivingStat::Long),
            _ => Err(StatsError::InvalidSortStat {
                category: "receiving",
                value: s.to_string(),
            }),
        }
    }
}

/// Sortable defensive stats. Sacks is the default ordering for every
/// defensive leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefenseStat {
    #[default]
    Sacks,
    Tkl,
    Tfl,
    Qh,
    Pd,
    Ff,
    Int,
    Games,
}

impl FromStr for DefenseStat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sacks" | "sk" => Ok(DefenseStat::Sacks),
            "tkl" | "tackles" => Ok(DefenseStat::Tkl),
            "tfl" => Ok(DefenseStat::Tfl),
            "qh" | "hits" => Ok(DefenseStat::Qh),
            "pd" | "pd_count" => Ok(DefenseStat::Pd),
            "ff" => Ok(DefenseStat::Ff),
            "int" | "int_count" => Ok(DefenseStat::Int),
            "games" | "g" => Ok(DefenseStat::Games),
            _ => Err(StatsError::InvalidSortStat {
                category: "defense",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_and_category_parse() {
        assert_eq!("Career".parse::<Scope>().unwrap(), Scope::Career);
        assert_eq!("single-game".parse::<Scope>().unwrap(), Scope::Game);
        assert_eq!("defence".parse::<Category>().unwrap(), Category::Defense);
        assert!(matches!(
            "decade".parse::<Scope>(),
            Err(StatsError::InvalidScope { .. })
        ));
        assert!(matches!(
            "kicking".parse::<Category>(),
            Err(StatsError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_default_sort_stats() {
        assert_eq!(PassingStat::default(), PassingStat::Yds);
        assert_eq!(RushingStat::default(), RushingStat::Yds);
        assert_eq!(ReceivingStat::default(), ReceivingStat::Yds);
        assert_eq!(DefenseStat::default(), DefenseStat::Sacks);
    }

    #[test]
    fn test_sort_stat_is_category_specific() {
        assert_eq!("rtg".parse::<PassingStat>().unwrap(), PassingStat::Rating);
        assert!("tkl".parse::<PassingStat>().is_err());
        assert!("rating".parse::<DefenseStat>().is_err());
        match "rec".parse::<RushingStat>() {
            Err(StatsError::InvalidSortStat { category, value }) => {
                assert_eq!(category, "rushing");
                assert_eq!(value, "rec");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
