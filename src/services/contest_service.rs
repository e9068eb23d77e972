//! Contest service

use std::collections::HashMap;

use crate::{
    catalog::{PoolProvider, filter_pool, sample_without_replacement},
    constants::{DEFAULT_DURATION_SECONDS, DEFAULT_NUM_PROBLEMS},
    error::{AppError, AppResult},
    handlers::contests::{
        request::{CreateContestRequest, MarkProblemRequest, StartContestRequest},
        response::{
            ContestStatusResponse, ContestView, CreateContestResponse, MarkProblemResponse,
            ProblemView, StartContestResponse,
        },
    },
    models::{Contest, ContestPhase},
    services::LeaderboardService,
    store::ContestStore,
    utils::{
        id::short_token,
        time::{epoch_ms, now_utc},
    },
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a new contest: fetch the pool, filter, sample, persist
    pub async fn create_contest(
        store: &dyn ContestStore,
        provider: &dyn PoolProvider,
        payload: CreateContestRequest,
    ) -> AppResult<CreateContestResponse> {
        let requested = payload.num_problems.unwrap_or(DEFAULT_NUM_PROBLEMS) as usize;
        let difficulty = payload.difficulty.unwrap_or_default();

        // A failed catalog fetch fails the whole operation; nothing is
        // persisted on any error before the insert below.
        let pool = provider.fetch_pool().await?;
        let candidates = filter_pool(pool, difficulty, payload.topic.as_deref(), requested)?;
        let chosen = sample_without_replacement(&candidates, requested, &mut rand::rng())?;

        let creator_id = payload.creator_id.filter(|id| !id.is_empty());
        if let Some(creator_id) = &creator_id {
            // Best effort: a missing display name is cosmetic
            if let Err(e) = store
                .upsert_user(creator_id, payload.creator_name.as_deref())
                .await
            {
                tracing::warn!("Creator upsert failed: {}", e);
            }
        }

        let contest = Contest {
            id: short_token(),
            num_problems: requested as i32,
            difficulty,
            problems: chosen,
            duration_seconds: sanitize_duration(payload.duration)
                .unwrap_or(DEFAULT_DURATION_SECONDS),
            created_at: now_utc(),
            start_time: None,
            creator_id,
        };
        store.insert_contest(&contest).await?;

        tracing::info!(
            contest_id = %contest.id,
            num_problems = contest.num_problems,
            difficulty = %contest.difficulty,
            "Contest created"
        );

        Ok(CreateContestResponse {
            problems: contest.problems.iter().map(ProblemView::from).collect(),
            contest_id: contest.id,
        })
    }

    /// Get the full contest view, with aggregated results and creator name
    pub async fn get_contest(store: &dyn ContestStore, id: &str) -> AppResult<ContestView> {
        let contest = store
            .fetch_contest(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Self::build_view(store, contest).await
    }

    /// Perform the Created -> Running transition
    pub async fn start_contest(
        store: &dyn ContestStore,
        id: &str,
        payload: StartContestRequest,
    ) -> AppResult<StartContestResponse> {
        let contest = store
            .fetch_contest(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        if contest.start_time.is_some() {
            return Err(AppError::AlreadyStarted);
        }

        // Soft creator check: only enforced when the contest has a creator
        // and the caller identified itself.
        if let (Some(creator_id), Some(caller_id)) = (&contest.creator_id, &payload.caller_id)
            && creator_id != caller_id
        {
            return Err(AppError::Forbidden(
                "Only the creator can start this contest".to_string(),
            ));
        }

        let now = now_utc();
        let updated = store
            .try_start(id, now, sanitize_duration(payload.duration))
            .await?
            // Lost the race against another start call
            .ok_or(AppError::AlreadyStarted)?;

        tracing::info!(contest_id = %id, duration = updated.duration_seconds, "Contest started");

        Ok(StartContestResponse {
            started_at: epoch_ms(updated.start_time.unwrap_or(now)),
            duration: updated.duration_seconds,
        })
    }

    /// Lightweight timing read for client polling
    pub async fn get_status(store: &dyn ContestStore, id: &str) -> AppResult<ContestStatusResponse> {
        let timing = store
            .fetch_timing(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        Ok(ContestStatusResponse {
            start_time: timing.start_time.map(epoch_ms),
            duration: timing.duration_seconds,
            phase: timing.phase_at(now_utc()),
        })
    }

    /// Mark a problem solved or unsolved for one user
    pub async fn mark_solved(
        store: &dyn ContestStore,
        id: &str,
        payload: MarkProblemRequest,
    ) -> AppResult<MarkProblemResponse> {
        let contest = store
            .fetch_contest(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        let now = now_utc();
        match contest.phase_at(now) {
            ContestPhase::Created => return Err(AppError::NotStarted),
            ContestPhase::Expired => return Err(AppError::Expired),
            ContestPhase::Running => {}
        }

        let problem_index = i32::try_from(payload.problem_index)
            .ok()
            .filter(|idx| *idx < contest.num_problems)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "problem_index {} out of range",
                    payload.problem_index
                ))
            })?;

        if payload.solved {
            // Best effort: a missing display name is cosmetic
            if let Err(e) = store
                .upsert_user(&payload.user_id, payload.display_name.as_deref())
                .await
            {
                tracing::warn!("User upsert failed: {}", e);
            }
            store
                .upsert_result(id, &payload.user_id, problem_index, now)
                .await?;
        } else {
            store
                .delete_result(id, &payload.user_id, problem_index)
                .await?;
        }

        let contest = Self::build_view(store, contest).await?;
        Ok(MarkProblemResponse { ok: true, contest })
    }

    /// Assemble the client-facing view of a contest
    async fn build_view(store: &dyn ContestStore, contest: Contest) -> AppResult<ContestView> {
        let rows = store.fetch_contest_results(&contest.id).await?;

        let mut user_ids: Vec<String> = rows.iter().map(|r| r.user_id.clone()).collect();
        user_ids.sort();
        user_ids.dedup();

        let names: HashMap<String, Option<String>> = store
            .fetch_users(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        let results = LeaderboardService::per_contest(&rows, &names);

        let creator_name = match &contest.creator_id {
            Some(creator_id) => store.fetch_user(creator_id).await?.and_then(|u| u.name),
            None => None,
        };

        Ok(ContestView {
            phase: contest.phase_at(now_utc()),
            problems: contest.problems.iter().map(ProblemView::from).collect(),
            created_at: epoch_ms(contest.created_at),
            start_time: contest.start_time.map(epoch_ms),
            duration: contest.duration_seconds,
            results,
            creator_id: contest.creator_id,
            creator_name,
            id: contest.id,
        })
    }
}

/// Keep a supplied duration only when it is finite and positive
fn sanitize_duration(duration: Option<f64>) -> Option<i64> {
    duration
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_duration() {
        assert_eq!(sanitize_duration(Some(3600.0)), Some(3600));
        assert_eq!(sanitize_duration(Some(f64::NAN)), None);
        assert_eq!(sanitize_duration(Some(f64::INFINITY)), None);
        assert_eq!(sanitize_duration(Some(0.0)), None);
        assert_eq!(sanitize_duration(Some(-60.0)), None);
        assert_eq!(sanitize_duration(None), None);
    }
}
