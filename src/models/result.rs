//! Solved-result ledger entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One ledger row: a specific user solved a specific problem in a specific
/// contest at a specific time.
///
/// At most one row exists per (contest_id, user_id, problem_index); a row's
/// presence means solved, unmarking deletes the row.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SolvedResult {
    pub contest_id: String,
    pub user_id: String,
    pub problem_index: i32,
    pub solved_at: DateTime<Utc>,
}
