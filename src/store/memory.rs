//! In-memory contest store
//!
//! Hash maps behind one RwLock, honoring the same contract as the Postgres
//! backend: `try_start` is check-then-set under the write lock, result rows
//! are keyed by the unique triple so an upsert can never duplicate one.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Contest, ContestTiming, SolvedResult, User},
};

use super::ContestStore;

#[derive(Default)]
struct MemInner {
    contests: HashMap<String, Contest>,
    users: HashMap<String, Option<String>>,
    results: HashMap<(String, String, i32), DateTime<Utc>>,
}

/// Test/dev backend
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<MemInner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContestStore for MemStore {
    async fn insert_contest(&self, contest: &Contest) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.contests.insert(contest.id.clone(), contest.clone());
        Ok(())
    }

    async fn fetch_contest(&self, id: &str) -> AppResult<Option<Contest>> {
        let inner = self.inner.read().await;
        Ok(inner.contests.get(id).cloned())
    }

    async fn try_start(
        &self,
        id: &str,
        started_at: DateTime<Utc>,
        duration_override: Option<i64>,
    ) -> AppResult<Option<Contest>> {
        let mut inner = self.inner.write().await;
        match inner.contests.get_mut(id) {
            Some(contest) if contest.start_time.is_none() => {
                contest.start_time = Some(started_at);
                if let Some(duration) = duration_override {
                    contest.duration_seconds = duration;
                }
                Ok(Some(contest.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn fetch_timing(&self, id: &str) -> AppResult<Option<ContestTiming>> {
        let inner = self.inner.read().await;
        Ok(inner.contests.get(id).map(|c| ContestTiming {
            start_time: c.start_time,
            duration_seconds: c.duration_seconds,
        }))
    }

    async fn upsert_user(&self, id: &str, name: Option<&str>) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let entry = inner.users.entry(id.to_string()).or_default();
        if let Some(name) = name {
            *entry = Some(name.to_string());
        }
        Ok(())
    }

    async fn fetch_user(&self, id: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(id).map(|name| User {
            id: id.to_string(),
            name: name.clone(),
        }))
    }

    async fn fetch_users(&self, ids: &[String]) -> AppResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| {
                inner.users.get(id).map(|name| User {
                    id: id.clone(),
                    name: name.clone(),
                })
            })
            .collect())
    }

    async fn upsert_result(
        &self,
        contest_id: &str,
        user_id: &str,
        problem_index: i32,
        solved_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.results.insert(
            (contest_id.to_string(), user_id.to_string(), problem_index),
            solved_at,
        );
        Ok(())
    }

    async fn delete_result(
        &self,
        contest_id: &str,
        user_id: &str,
        problem_index: i32,
    ) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .results
            .remove(&(contest_id.to_string(), user_id.to_string(), problem_index));
        Ok(())
    }

    async fn fetch_contest_results(&self, contest_id: &str) -> AppResult<Vec<SolvedResult>> {
        let inner = self.inner.read().await;
        Ok(inner
            .results
            .iter()
            .filter(|((cid, _, _), _)| cid == contest_id)
            .map(|((cid, uid, idx), solved_at)| SolvedResult {
                contest_id: cid.clone(),
                user_id: uid.clone(),
                problem_index: *idx,
                solved_at: *solved_at,
            })
            .collect())
    }

    async fn fetch_all_results(&self) -> AppResult<Vec<SolvedResult>> {
        let inner = self.inner.read().await;
        Ok(inner
            .results
            .iter()
            .map(|((cid, uid, idx), solved_at)| SolvedResult {
                contest_id: cid.clone(),
                user_id: uid.clone(),
                problem_index: *idx,
                solved_at: *solved_at,
            })
            .collect())
    }

    async fn fetch_recent_results(&self, limit: i64) -> AppResult<Vec<SolvedResult>> {
        let mut rows = self.fetch_all_results().await?;
        rows.sort_by(|a, b| b.solved_at.cmp(&a.solved_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
