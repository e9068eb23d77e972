//! User handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{error::AppResult, services::UserService, state::AppState};

use super::{request::UpsertUserRequest, response::OkResponse};

/// Create or rename a user
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUserRequest>,
) -> AppResult<Json<OkResponse>> {
    payload.validate()?;

    UserService::upsert(state.store(), &payload.user_id, payload.name.as_deref()).await?;
    Ok(Json(OkResponse { ok: true }))
}
