//! Season years.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    /// Years outside this window are treated as malformed input, not as absent data.
    pub const MIN: u16 = 1900;
    pub const MAX: u16 = 2100;

    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Validate a year coming from an untyped source such as a tool call.
    pub fn try_from_i64(year: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&year) {
            Ok(Self(year as u16))
        } else {
            Err(StatsError::InvalidSeason {
                value: year.to_string(),
            })
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let year: i64 = s.trim().parse().map_err(|_| StatsError::InvalidSeason {
            value: s.to_string(),
        })?;
        Self::try_from_i64(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse() {
        assert_eq!("2009".parse::<Season>().unwrap(), Season::new(2009));
        assert_eq!(" 1967 ".parse::<Season>().unwrap().as_u16(), 1967);
    }

    #[test]
    fn test_season_rejects_garbage() {
        for bad in ["", "20o9", "-1", "99999", "1850"] {
            match bad.parse::<Season>() {
                Err(StatsError::InvalidSeason { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidSeason for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_season_ordering() {
        assert!(Season::new(1999) < Season::new(2001));
    }
}
