//! User service

use crate::{error::AppResult, store::ContestStore};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Create or update a user; name is last-write-wins when supplied
    pub async fn upsert(
        store: &dyn ContestStore,
        user_id: &str,
        name: Option<&str>,
    ) -> AppResult<()> {
        store.upsert_user(user_id, name).await
    }
}
