//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contests;
pub mod debug;
pub mod health;
pub mod leaderboard;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(leaderboard::routes())
        .merge(debug::routes())
        .nest("/contests", contests::routes())
        .nest("/users", users::routes())
}
