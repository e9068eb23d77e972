//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record
///
/// Ids are client-generated opaque tokens; users are created lazily on first
/// mark, contest creation, or name save. The name is last-write-wins.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
}
