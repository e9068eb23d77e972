//! Contest request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NUM_PROBLEMS;
use crate::models::DifficultyFilter;

/// Create contest request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateContestRequest {
    /// Number of problems to sample (defaults to 5)
    #[validate(range(min = 1, max = MAX_NUM_PROBLEMS))]
    pub num_problems: Option<u32>,

    /// Difficulty filter: "mixed", "Easy" or "Medium"
    pub difficulty: Option<DifficultyFilter>,

    /// Contest duration in seconds; non-finite or non-positive values fall
    /// back to the default
    pub duration: Option<f64>,

    /// Restrict the pool to one inferred topic
    pub topic: Option<String>,

    /// Creator's opaque user id
    pub creator_id: Option<String>,

    /// Creator's display name
    pub creator_name: Option<String>,
}

/// Start contest request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct StartContestRequest {
    /// Duration override in seconds, applied by the start transition only
    pub duration: Option<f64>,

    /// Caller's user id; when omitted the creator check is skipped
    pub caller_id: Option<String>,
}

/// Mark solved/unsolved request
#[derive(Debug, Deserialize, Validate)]
pub struct MarkProblemRequest {
    #[validate(length(min = 1, message = "user_id required"))]
    pub user_id: String,

    pub problem_index: u32,

    pub solved: bool,

    pub display_name: Option<String>,
}
