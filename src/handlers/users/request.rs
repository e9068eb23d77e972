//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Upsert user request
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(length(min = 1, message = "user_id required"))]
    pub user_id: String,

    pub name: Option<String>,
}
