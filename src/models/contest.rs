//! Contest model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::problem::{DifficultyFilter, Problem};

/// Contest record
///
/// The problem set is fixed at creation. `start_time` goes from null to a
/// timestamp at most once; `duration_seconds` is only mutable by the request
/// that performs the start transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
    pub num_problems: i32,
    pub difficulty: DifficultyFilter,
    pub problems: Vec<Problem>,
    pub duration_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub start_time: Option<DateTime<Utc>>,
    pub creator_id: Option<String>,
}

impl Contest {
    /// Computed end of the contest window, if started
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
            .map(|start| start + Duration::seconds(self.duration_seconds))
    }

    /// Current phase of the contest, derived at read time
    ///
    /// Expiry is never written anywhere; every read past the threshold
    /// reports `Expired` to late pollers.
    pub fn phase_at(&self, now: DateTime<Utc>) -> ContestPhase {
        match self.end_time() {
            None => ContestPhase::Created,
            Some(end) if now < end => ContestPhase::Running,
            Some(_) => ContestPhase::Expired,
        }
    }

    pub fn phase(&self) -> ContestPhase {
        self.phase_at(Utc::now())
    }
}

/// Contest lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestPhase {
    Created,
    Running,
    Expired,
}

impl std::fmt::Display for ContestPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Running => write!(f, "running"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Lightweight timing view used by status polling; loading this must not
/// touch the result rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestTiming {
    pub start_time: Option<DateTime<Utc>>,
    pub duration_seconds: i64,
}

impl ContestTiming {
    /// Same derived-phase rule as the full contest record
    pub fn phase_at(&self, now: DateTime<Utc>) -> ContestPhase {
        match self.start_time {
            None => ContestPhase::Created,
            Some(start) if now < start + Duration::seconds(self.duration_seconds) => {
                ContestPhase::Running
            }
            Some(_) => ContestPhase::Expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::problem::Difficulty;

    fn contest(start_time: Option<DateTime<Utc>>) -> Contest {
        Contest {
            id: "abc12345".to_string(),
            num_problems: 1,
            difficulty: DifficultyFilter::Easy,
            problems: vec![Problem {
                title: "Two Sum".to_string(),
                slug: "two-sum".to_string(),
                difficulty: Difficulty::Easy,
            }],
            duration_seconds: 5400,
            created_at: Utc::now(),
            start_time,
            creator_id: None,
        }
    }

    #[test]
    fn test_phase_created_while_unstarted() {
        let c = contest(None);
        assert_eq!(c.phase(), ContestPhase::Created);
        assert_eq!(c.end_time(), None);
    }

    #[test]
    fn test_phase_running_within_window() {
        let start = Utc::now();
        let c = contest(Some(start));
        assert_eq!(c.phase_at(start + Duration::seconds(5399)), ContestPhase::Running);
    }

    #[test]
    fn test_phase_expired_at_threshold() {
        let start = Utc::now();
        let c = contest(Some(start));
        assert_eq!(c.phase_at(start + Duration::seconds(5400)), ContestPhase::Expired);
        assert_eq!(c.phase_at(start + Duration::seconds(9000)), ContestPhase::Expired);
    }
}
