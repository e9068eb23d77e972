//! Global leaderboard handler

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    error::AppResult,
    services::{LeaderboardRow, LeaderboardService},
    state::AppState,
};

/// Global leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub ok: bool,
    pub rows: Vec<LeaderboardRow>,
}

/// All result rows across all contests, ranked by solved count
async fn global_leaderboard(State(state): State<AppState>) -> AppResult<Json<LeaderboardResponse>> {
    let rows = LeaderboardService::global(state.store()).await?;
    Ok(Json(LeaderboardResponse { ok: true, rows }))
}

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(global_leaderboard))
}
