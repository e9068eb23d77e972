//! Debug introspection handlers
//!
//! Operational endpoint, hidden unless explicitly enabled via configuration.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    constants::DEBUG_RESULTS_LIMIT,
    error::{AppError, AppResult},
    models::SolvedResult,
    state::AppState,
};

/// Recent result rows response
#[derive(Debug, Serialize)]
pub struct DebugResultsResponse {
    pub ok: bool,
    pub rows: Vec<SolvedResult>,
}

/// Most recent result rows, newest first
async fn recent_results(State(state): State<AppState>) -> AppResult<Json<DebugResultsResponse>> {
    if !state.config().debug.expose_results {
        return Err(AppError::Forbidden("Debug endpoint disabled".to_string()));
    }

    let rows = state.store().fetch_recent_results(DEBUG_RESULTS_LIMIT).await?;
    Ok(Json(DebugResultsResponse { ok: true, rows }))
}

/// Debug routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/debug/results", get(recent_results))
}
