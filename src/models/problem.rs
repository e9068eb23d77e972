//! Problem model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Problem difficulty label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map the catalog's numeric difficulty level (1..=3) to a label
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// Difficulty filter for contest creation: an exact difficulty or "mixed"
/// (everything the default pool policy allows, i.e. Easy + Medium)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    #[serde(rename = "mixed")]
    Mixed,
    Easy,
    Medium,
}

impl DifficultyFilter {
    /// The exact difficulty this filter selects, if any
    pub fn exact(&self) -> Option<Difficulty> {
        match self {
            Self::Mixed => None,
            Self::Easy => Some(Difficulty::Easy),
            Self::Medium => Some(Difficulty::Medium),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mixed => write!(f, "mixed"),
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mixed" => Ok(Self::Mixed),
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            _ => Err(()),
        }
    }
}

/// A catalog problem. Immutable once fetched; the topic is derived from
/// title/slug at view time, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_level() {
        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_level(0), None);
    }

    #[test]
    fn test_filter_round_trip() {
        for filter in [
            DifficultyFilter::Mixed,
            DifficultyFilter::Easy,
            DifficultyFilter::Medium,
        ] {
            assert_eq!(filter.to_string().parse::<DifficultyFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_filter_exact() {
        assert_eq!(DifficultyFilter::Mixed.exact(), None);
        assert_eq!(DifficultyFilter::Easy.exact(), Some(Difficulty::Easy));
    }
}
