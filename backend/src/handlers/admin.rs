use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{debug_handler, Json, Router};
use shared::api::{AdminStatus, ApiResponse, LockRequest, PrizeInfo, SecretRequest, SpinLog, SpinStats};

use crate::error::AppError;
use crate::services::lottery;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/lock", post(lock_prize))
        .route("/unlock", post(unlock_prize))
        .route("/reset", post(reset_stocks))
        .route("/logs", get(get_logs))
        .route("/status", get(get_status))
        .route("/stats", get(get_stats))
        .route("/prizes", get(get_prizes))
}

#[debug_handler]
async fn lock_prize(
    State(state): State<AppState>,
    payload: Result<Json<LockRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Json(request) = payload?;
    let prize = lottery::lock_prize(&state, &request).await?;
    Ok(Json(ApiResponse::message(format!("Prize locked for next spin: {}", prize.id))))
}

#[debug_handler]
async fn unlock_prize(
    State(state): State<AppState>,
    payload: Result<Json<SecretRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Json(request) = payload?;
    lottery::unlock_prize(&state, &request.secret).await?;
    Ok(Json(ApiResponse::message("Prize lock removed")))
}

#[debug_handler]
async fn reset_stocks(
    State(state): State<AppState>,
    payload: Result<Json<SecretRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Json(request) = payload?;
    lottery::reset_stocks(&state, &request.secret).await?;
    Ok(Json(ApiResponse::message("All stocks reset to default values")))
}

async fn get_logs(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<Vec<SpinLog>>>, AppError> {
    // A limit that does not parse falls back to the default
    let limit = params.get("limit").and_then(|limit| limit.trim().parse::<i64>().ok());
    let logs = lottery::recent_logs(&state, limit).await?;
    Ok(Json(ApiResponse::ok(logs)))
}

async fn get_status(State(state): State<AppState>) -> Result<Json<ApiResponse<AdminStatus>>, AppError> {
    Ok(Json(ApiResponse::ok(lottery::status(&state).await?)))
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<ApiResponse<SpinStats>>, AppError> {
    Ok(Json(ApiResponse::ok(lottery::stats(&state).await?)))
}

async fn get_prizes(State(state): State<AppState>) -> Json<ApiResponse<Vec<PrizeInfo>>> {
    let prizes = state.config.prizes.iter().map(|prize| prize.info()).collect();
    Json(ApiResponse::ok(prizes))
}
