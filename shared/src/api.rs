use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::spin_sequencer::SpinOutcome;

// === Public API Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinRequest {
    pub instagram_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub result: String,
    pub prize_name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_locked: bool,
}

impl From<SpinResult> for SpinOutcome {
    fn from(result: SpinResult) -> Self {
        Self {
            prize_id: result.result,
            display_name: result.prize_name,
        }
    }
}

/// Envelope used by every endpoint except a successful spin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T = ()> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, message: None, data: Some(data) }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), data: None }
    }
}

// === Admin API Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockRequest {
    #[serde(default)]
    pub prize_id: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretRequest {
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockStatus {
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_prize_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockStatus {
    pub prize_id: String,
    pub name: String,
    pub stock: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStatus {
    pub lock: LockStatus,
    #[serde(default)]
    pub stocks: Vec<StockStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinLog {
    pub id: i64,
    pub instagram_id: String,
    pub prize_won: String,
    pub prize_name: String,
    pub was_locked: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeInfo {
    pub id: String,
    pub name: String,
    pub stock: i32,
    pub probability: u32,
    pub is_triggered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinStats {
    pub total_spins: i64,
    pub by_prize: BTreeMap<String, i64>,
}
