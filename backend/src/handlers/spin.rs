use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{debug_handler, Json, Router};
use shared::api::{SpinRequest, SpinResult};
use shared::constants::{INSTAGRAM_ID_REQUIRED_ERROR, INVALID_INSTAGRAM_ID_ERROR};
use shared::validation::validate_instagram_id;

use crate::error::AppError;
use crate::services::lottery;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/spin", post(spin_wheel))
}

#[debug_handler]
async fn spin_wheel(
    State(state): State<AppState>,
    payload: Result<Json<SpinRequest>, JsonRejection>,
) -> Result<Json<SpinResult>, AppError> {
    let Json(request) = payload?;

    let instagram_id = validate_instagram_id(&request.instagram_id).map_err(|e| {
        if e.code == "instagram_id_required" {
            AppError::BadRequest(INSTAGRAM_ID_REQUIRED_ERROR)
        } else {
            AppError::BadRequest(INVALID_INSTAGRAM_ID_ERROR)
        }
    })?;

    let result = lottery::spin(&state, instagram_id).await?;
    Ok(Json(result))
}
