//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::{
    error::AppResult,
    services::ContestService,
    state::AppState,
};

use super::{
    request::{CreateContestRequest, MarkProblemRequest, StartContestRequest},
    response::{
        ContestStatusResponse, ContestView, CreateContestResponse, MarkProblemResponse,
        StartContestResponse,
    },
};

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<Json<CreateContestResponse>> {
    payload.validate()?;

    let contest = ContestService::create_contest(state.store(), state.provider(), payload).await?;
    Ok(Json(contest))
}

/// Get a specific contest, with aggregated results
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContestView>> {
    let contest = ContestService::get_contest(state.store(), &id).await?;
    Ok(Json(contest))
}

/// Start a contest
pub async fn start_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StartContestRequest>,
) -> AppResult<Json<StartContestResponse>> {
    let started = ContestService::start_contest(state.store(), &id, payload).await?;
    Ok(Json(started))
}

/// Lightweight status read for polling
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContestStatusResponse>> {
    let status = ContestService::get_status(state.store(), &id).await?;
    Ok(Json(status))
}

/// Mark a problem solved or unsolved
pub async fn mark_solved(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MarkProblemRequest>,
) -> AppResult<Json<MarkProblemResponse>> {
    payload.validate()?;

    let marked = ContestService::mark_solved(state.store(), &id, payload).await?;
    Ok(Json(marked))
}
