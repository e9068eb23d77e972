//! Pre-start polling and optimistic mark state
//!
//! Before a contest starts, participants other than the creator sit on a
//! short-interval status poll; the moment the server reports a start, the
//! local view cuts over to the running countdown. Marks are applied
//! optimistically and reconciled against the server's authoritative view.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    constants::STATUS_POLL_MS,
    error::{AppError, AppResult},
    models::ContestTiming,
};

use super::countdown::Countdown;

/// Something that can answer a status poll (normally the status endpoint)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_timing(&self) -> AppResult<ContestTiming>;
}

/// Poll until the server reports a start, then return the countdown.
///
/// Transient poll failures are logged and retried on the next tick; an
/// unknown contest aborts the wait.
pub async fn wait_for_start(source: &dyn StatusSource) -> AppResult<Countdown> {
    wait_for_start_every(source, Duration::from_millis(STATUS_POLL_MS)).await
}

/// Same loop with an explicit poll interval
pub async fn wait_for_start_every(
    source: &dyn StatusSource,
    poll_interval: Duration,
) -> AppResult<Countdown> {
    loop {
        match source.fetch_timing().await {
            Ok(timing) => {
                if let Some(countdown) = Countdown::from_timing(&timing) {
                    return Ok(countdown);
                }
            }
            Err(e @ AppError::NotFound(_)) => return Err(e),
            Err(e) => tracing::warn!("Status poll failed: {}", e),
        }
        tokio::time::sleep(poll_interval).await;
    }
}

/// Local solved flags with optimistic updates
///
/// The flag flips before the network round-trip; the server response
/// overwrites it, and a failed call rolls the flip back.
#[derive(Debug, Default)]
pub struct MarkTracker {
    solved: BTreeMap<i32, bool>,
}

impl MarkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_solved(&self, problem_index: i32) -> bool {
        self.solved.get(&problem_index).copied().unwrap_or(false)
    }

    /// Overwrite local state with the server's authoritative view
    pub fn reconcile(&mut self, server: BTreeMap<i32, bool>) {
        self.solved = server;
    }

    /// Optimistically apply a mark, then send it; rolls back on failure
    pub async fn mark<F, Fut>(
        &mut self,
        problem_index: i32,
        solved: bool,
        send: F,
    ) -> AppResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<BTreeMap<i32, bool>>>,
    {
        let previous = self.solved.insert(problem_index, solved);

        match send().await {
            Ok(server) => {
                self.reconcile(server);
                Ok(())
            }
            Err(e) => {
                match previous {
                    Some(value) => self.solved.insert(problem_index, value),
                    None => self.solved.remove(&problem_index),
                };
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_start_polls_until_started() {
        let start = Utc::now();
        let mut source = MockStatusSource::new();
        let mut calls = 0;
        source.expect_fetch_timing().returning(move || {
            calls += 1;
            Ok(ContestTiming {
                start_time: if calls >= 3 { Some(start) } else { None },
                duration_seconds: 5400,
            })
        });

        // Default interval; paused time makes the waits instant
        let countdown = wait_for_start(&source).await.unwrap();
        assert_eq!(countdown.duration_seconds, 5400);
    }

    #[tokio::test]
    async fn test_wait_for_start_aborts_on_not_found() {
        let mut source = MockStatusSource::new();
        source
            .expect_fetch_timing()
            .returning(|| Err(AppError::NotFound("Contest not found".to_string())));

        let err = wait_for_start_every(&source, Duration::from_millis(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mark_reconciles_with_server_view() {
        let mut tracker = MarkTracker::new();

        tracker
            .mark(0, true, || async {
                let mut server = BTreeMap::new();
                server.insert(0, true);
                server.insert(2, true);
                Ok(server)
            })
            .await
            .unwrap();

        // Server view wins, including solves made elsewhere
        assert!(tracker.is_solved(0));
        assert!(tracker.is_solved(2));
        assert!(!tracker.is_solved(1));
    }

    #[tokio::test]
    async fn test_mark_rolls_back_on_failure() {
        let mut tracker = MarkTracker::new();

        let err = tracker
            .mark(1, true, || async {
                Err(AppError::Catalog("connection reset".to_string()))
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Catalog(_)));
        assert!(!tracker.is_solved(1));
    }

    #[tokio::test]
    async fn test_unmark_rolls_back_to_solved_on_failure() {
        let mut tracker = MarkTracker::new();
        let mut initial = BTreeMap::new();
        initial.insert(0, true);
        tracker.reconcile(initial);

        tracker
            .mark(0, false, || async {
                Err(AppError::Database("deadlock".to_string()))
            })
            .await
            .unwrap_err();

        assert!(tracker.is_solved(0));
    }
}
