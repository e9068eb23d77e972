//! User response DTOs

use serde::Serialize;

/// Simple acknowledgement response
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
