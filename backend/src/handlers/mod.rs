pub mod admin;
pub mod spin;

use axum::extract::rejection::JsonRejection;
use shared::constants::INVALID_BODY_ERROR;
use tracing::debug;

use crate::error::AppError;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection);
        Self::BadRequest(INVALID_BODY_ERROR)
    }
}
