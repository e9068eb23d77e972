//! Contest store
//!
//! One operation contract over contest, user, and result persistence, with
//! an injected backend: Postgres in production, an in-memory map for tests
//! and throwaway runs. Services depend on the trait, never on a backend.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{Contest, ContestTiming, SolvedResult, User},
};

pub use memory::MemStore;
pub use postgres::PgStore;

#[async_trait]
pub trait ContestStore: Send + Sync {
    /// Persist a freshly created contest
    async fn insert_contest(&self, contest: &Contest) -> AppResult<()>;

    /// Load a full contest record
    async fn fetch_contest(&self, id: &str) -> AppResult<Option<Contest>>;

    /// Atomically set the start time if and only if it is still unset.
    ///
    /// Returns the updated contest when this call performed the transition,
    /// `None` when the contest was already started (or does not exist).
    /// A valid duration override is applied in the same write.
    async fn try_start(
        &self,
        id: &str,
        started_at: DateTime<Utc>,
        duration_override: Option<i64>,
    ) -> AppResult<Option<Contest>>;

    /// Lightweight timing read for status polling; must not load results
    async fn fetch_timing(&self, id: &str) -> AppResult<Option<ContestTiming>>;

    /// Create or update a user; a `None` name leaves any existing name alone
    async fn upsert_user(&self, id: &str, name: Option<&str>) -> AppResult<()>;

    async fn fetch_user(&self, id: &str) -> AppResult<Option<User>>;

    async fn fetch_users(&self, ids: &[String]) -> AppResult<Vec<User>>;

    /// Atomically create-or-refresh the unique result row for the triple
    async fn upsert_result(
        &self,
        contest_id: &str,
        user_id: &str,
        problem_index: i32,
        solved_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Delete the result row for the triple; no-op if absent
    async fn delete_result(
        &self,
        contest_id: &str,
        user_id: &str,
        problem_index: i32,
    ) -> AppResult<()>;

    /// All result rows for one contest
    async fn fetch_contest_results(&self, contest_id: &str) -> AppResult<Vec<SolvedResult>>;

    /// All result rows across all contests (global leaderboard)
    async fn fetch_all_results(&self) -> AppResult<Vec<SolvedResult>>;

    /// Most recent result rows, newest first (debug introspection)
    async fn fetch_recent_results(&self, limit: i64) -> AppResult<Vec<SolvedResult>>;
}
