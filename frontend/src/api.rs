use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api::{
    AdminStatus, ApiResponse, LockRequest, PrizeInfo, SecretRequest, SpinLog, SpinRequest, SpinResult, SpinStats,
};
use shared::constants::{
    ADMIN_LOCK_ENDPOINT, ADMIN_LOGS_ENDPOINT, ADMIN_PRIZES_ENDPOINT, ADMIN_RESET_ENDPOINT, ADMIN_STATS_ENDPOINT,
    ADMIN_STATUS_ENDPOINT, ADMIN_UNLOCK_ENDPOINT, SPIN_ENDPOINT, SPIN_FAILED_ERROR,
};
use shared::spin_sequencer::{FetchError, ResultFetcher, SettleTimer, SpinOutcome, SpinSequencer};

use crate::config::api_url;

pub type WheelSequencer = SpinSequencer<HttpResultFetcher, GlooSettleTimer>;

const NETWORK_ERROR: &str = "Could not reach the server. Please check your connection and try again.";

/// Text shown to the player for a failed request.
pub fn user_message(error: &FetchError) -> String {
    match error {
        FetchError::Status { message: Some(message), .. } => message.clone(),
        FetchError::Network(_) => NETWORK_ERROR.to_string(),
        _ => SPIN_FAILED_ERROR.to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let code = response.status();
        // Error bodies carry the envelope with a message
        let message = response
            .json::<ApiResponse>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(FetchError::Status { code, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, FetchError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| FetchError::Malformed(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    read_json(response).await
}

async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let body: ApiResponse<T> = read_json(response).await?;
    body.data
        .ok_or_else(|| FetchError::Malformed("response has no data".to_string()))
}

async fn admin_action<B: Serialize>(path: &str, body: &B) -> Result<String, FetchError> {
    let body: ApiResponse = post_json(path, body).await?;
    Ok(body.message.unwrap_or_default())
}

pub async fn spin(instagram_id: &str) -> Result<SpinResult, FetchError> {
    let request = SpinRequest { instagram_id: instagram_id.to_string() };
    post_json(SPIN_ENDPOINT, &request).await
}

pub async fn lock_prize(prize_id: &str, secret: &str) -> Result<String, FetchError> {
    let request = LockRequest {
        prize_id: prize_id.to_string(),
        secret: secret.to_string(),
    };
    admin_action(ADMIN_LOCK_ENDPOINT, &request).await
}

pub async fn unlock_prize(secret: &str) -> Result<String, FetchError> {
    admin_action(ADMIN_UNLOCK_ENDPOINT, &SecretRequest { secret: secret.to_string() }).await
}

pub async fn reset_stocks(secret: &str) -> Result<String, FetchError> {
    admin_action(ADMIN_RESET_ENDPOINT, &SecretRequest { secret: secret.to_string() }).await
}

pub async fn fetch_logs(limit: i64) -> Result<Vec<SpinLog>, FetchError> {
    get_data(&format!("{}?limit={}", ADMIN_LOGS_ENDPOINT, limit)).await
}

pub async fn fetch_status() -> Result<AdminStatus, FetchError> {
    get_data(ADMIN_STATUS_ENDPOINT).await
}

pub async fn fetch_stats() -> Result<SpinStats, FetchError> {
    get_data(ADMIN_STATS_ENDPOINT).await
}

pub async fn fetch_prizes() -> Result<Vec<PrizeInfo>, FetchError> {
    get_data(ADMIN_PRIZES_ENDPOINT).await
}

/// Asks the backend for the outcome of a spin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpResultFetcher;

impl ResultFetcher for HttpResultFetcher {
    fn fetch<'a>(&'a self, instagram_id: &'a str) -> LocalBoxFuture<'a, Result<SpinOutcome, FetchError>> {
        async move { spin(instagram_id).await.map(SpinOutcome::from) }.boxed_local()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSettleTimer;

impl SettleTimer for GlooSettleTimer {
    fn sleep(&self, duration_ms: u32) -> LocalBoxFuture<'_, ()> {
        TimeoutFuture::new(duration_ms).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let rejected = FetchError::Status {
            code: 400,
            message: Some("Please enter a valid Instagram account".to_string()),
        };
        assert_eq!(user_message(&rejected), "Please enter a valid Instagram account");
        assert_eq!(
            user_message(&FetchError::Status { code: 502, message: None }),
            SPIN_FAILED_ERROR
        );
        assert_eq!(user_message(&FetchError::Network("offline".to_string())), NETWORK_ERROR);
        assert_eq!(user_message(&FetchError::Malformed("eof".to_string())), SPIN_FAILED_ERROR);
    }
}
