//! Opaque token generation

use uuid::Uuid;

use crate::constants::CONTEST_ID_LENGTH;

/// Generate a short opaque contest token (first 8 hex chars of a v4 UUID)
pub fn short_token() -> String {
    Uuid::new_v4().simple().to_string()[..CONTEST_ID_LENGTH].to_string()
}
