//! Contest management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_contest))
        .route("/{id}", get(handler::get_contest))
        .route("/{id}/start", post(handler::start_contest))
        .route("/{id}/status", get(handler::get_status))
        .route("/{id}/mark", post(handler::mark_solved))
}
