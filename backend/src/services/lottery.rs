use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;
use shared::api::{AdminStatus, LockRequest, SpinLog, SpinResult, SpinStats};
use shared::constants::{
    DEFAULT_LOG_LIMIT, INVALID_PRIZE_ID_ERROR, MAX_LOG_LIMIT, PRIZE_ID_REQUIRED_ERROR,
};
use shared::prizes::{PrizeConfig, NOTHING_PRIZE_ID, NOTHING_PRIZE_NAME};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::models::NewSpinLog;
use crate::repository::redis_repository::RedisRepository;
use crate::AppState;

/// Storage the lock claim runs against.
#[allow(async_fn_in_trait)]
pub trait LockStore {
    /// Returns the locked prize id and clears the lock atomically.
    async fn take_prize_lock(&self) -> redis::RedisResult<Option<String>>;
    async fn decrement_stock(&self, prize_id: &str) -> redis::RedisResult<Option<i64>>;
    async fn increment_stock(&self, prize_id: &str) -> redis::RedisResult<()>;
}

impl LockStore for RedisRepository {
    async fn take_prize_lock(&self) -> redis::RedisResult<Option<String>> {
        RedisRepository::take_prize_lock(self).await
    }

    async fn decrement_stock(&self, prize_id: &str) -> redis::RedisResult<Option<i64>> {
        RedisRepository::decrement_stock(self, prize_id).await
    }

    async fn increment_stock(&self, prize_id: &str) -> redis::RedisResult<()> {
        RedisRepository::increment_stock(self, prize_id).await
    }
}

/// What to do with a locked prize once its stock has been decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockClaim {
    Awarded,
    /// Stock went negative and has to be given back
    Depleted,
}

/// `remaining` is the stock after `DECR`, or `None` for an untracked prize.
pub fn lock_claim(remaining: Option<i64>) -> LockClaim {
    match remaining {
        None => LockClaim::Awarded,
        Some(stock) if stock >= 0 => LockClaim::Awarded,
        Some(_) => LockClaim::Depleted,
    }
}

/// Weighted draw over prizes that can be won without a lock. `None` when no
/// prize carries any weight.
pub fn pick_random_prize<'a, R: Rng + ?Sized>(
    prizes: &'a [PrizeConfig],
    rng: &mut R,
) -> Option<&'a PrizeConfig> {
    let candidates: Vec<&PrizeConfig> = prizes
        .iter()
        .filter(|prize| !prize.is_triggered && prize.probability > 0)
        .collect();

    let weights = WeightedIndex::new(candidates.iter().map(|prize| prize.probability)).ok()?;
    Some(candidates[weights.sample(rng)])
}

pub fn clamp_log_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(limit) if limit > 0 => limit.min(MAX_LOG_LIMIT),
        _ => DEFAULT_LOG_LIMIT,
    }
}

pub fn verify_secret(config: &Config, secret: &str) -> Result<(), AppError> {
    if secret == config.admin_secret {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

/// Claims the pending lock, if any. Only the spin that took the lock touches
/// stock; a depleted prize gets its unit back and the spin draws at random.
pub async fn claim_locked_prize<S: LockStore>(
    store: &S,
    config: &Config,
) -> Result<Option<(String, String)>, AppError> {
    let Some(locked_id) = store.take_prize_lock().await? else {
        return Ok(None);
    };

    let remaining = store.decrement_stock(&locked_id).await?;
    match lock_claim(remaining) {
        LockClaim::Awarded => {
            let name = config.prize_name(&locked_id);
            info!("Locked prize {} awarded, remaining stock {:?}", locked_id, remaining);
            Ok(Some((locked_id, name)))
        }
        LockClaim::Depleted => {
            store.increment_stock(&locked_id).await?;
            warn!("Locked prize {} is out of stock, falling back to a random draw", locked_id);
            Ok(None)
        }
    }
}

pub async fn spin(state: &AppState, instagram_id: String) -> Result<SpinResult, AppError> {
    let (prize_id, prize_name, was_locked) = match claim_locked_prize(&state.redis, &state.config).await? {
        Some((id, name)) => (id, name, true),
        None => {
            let (id, name) = pick_random_prize(&state.config.prizes, &mut rand::thread_rng())
                .map(|prize| (prize.id, prize.name))
                .unwrap_or((NOTHING_PRIZE_ID, NOTHING_PRIZE_NAME));
            (id.to_string(), name.to_string(), false)
        }
    };

    info!(instagram_id = %instagram_id, locked = was_locked, "Spin won {}", prize_id);

    state.postgres.log_spin_async(NewSpinLog {
        instagram_id,
        prize_won: prize_id.clone(),
        prize_name: prize_name.clone(),
        was_locked,
        created_at: OffsetDateTime::now_utc(),
    });

    Ok(SpinResult {
        result: prize_id,
        prize_name,
        is_locked: was_locked,
    })
}

/// Locks `prize_id` for the next spin and returns the prize that was locked.
pub async fn lock_prize(state: &AppState, request: &LockRequest) -> Result<PrizeConfig, AppError> {
    verify_secret(&state.config, &request.secret)?;

    let prize_id = request.prize_id.trim();
    if prize_id.is_empty() {
        return Err(AppError::BadRequest(PRIZE_ID_REQUIRED_ERROR));
    }
    let prize = *state
        .config
        .find_prize(prize_id)
        .ok_or(AppError::BadRequest(INVALID_PRIZE_ID_ERROR))?;

    state.redis.set_prize_lock(prize.id).await?;
    info!("Prize locked for next spin: {}", prize.id);
    Ok(prize)
}

pub async fn unlock_prize(state: &AppState, secret: &str) -> Result<(), AppError> {
    verify_secret(&state.config, secret)?;
    state.redis.clear_prize_lock().await?;
    info!("Prize lock removed");
    Ok(())
}

pub async fn reset_stocks(state: &AppState, secret: &str) -> Result<(), AppError> {
    verify_secret(&state.config, secret)?;
    state.redis.reset_stocks(&state.config.prizes).await?;
    info!("All stocks reset to configured values");
    Ok(())
}

pub async fn status(state: &AppState) -> Result<AdminStatus, AppError> {
    Ok(AdminStatus {
        lock: state.redis.lock_status().await?,
        stocks: state.redis.stock_statuses(&state.config.prizes).await,
    })
}

pub async fn recent_logs(state: &AppState, limit: Option<i64>) -> Result<Vec<SpinLog>, AppError> {
    Ok(state.postgres.recent_logs(clamp_log_limit(limit)).await?)
}

pub async fn stats(state: &AppState) -> Result<SpinStats, AppError> {
    Ok(state.postgres.stats().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::prizes::DEFAULT_PRIZES;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[test]
    fn test_lock_claim() {
        assert_eq!(lock_claim(Some(4)), LockClaim::Awarded);
        assert_eq!(lock_claim(Some(0)), LockClaim::Awarded);
        assert_eq!(lock_claim(Some(-1)), LockClaim::Depleted);
        assert_eq!(lock_claim(None), LockClaim::Awarded);
    }

    #[test]
    fn test_random_draw_skips_triggered_prizes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for _ in 0..2000 {
            let prize = pick_random_prize(&DEFAULT_PRIZES, &mut rng).unwrap();
            assert!(!prize.is_triggered, "{} should need a lock", prize.id);
            *counts.entry(prize.id).or_default() += 1;
        }

        // 50/50 between NOTHING and GIVE_IG
        assert_eq!(counts.len(), 2);
        assert!(counts.values().all(|&count| count > 800));
    }

    #[test]
    fn test_zero_weight_draws_nothing() {
        let prizes: Vec<PrizeConfig> = DEFAULT_PRIZES
            .iter()
            .map(|prize| PrizeConfig { probability: 0, ..*prize })
            .collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random_prize(&prizes, &mut rng).is_none());
        assert!(pick_random_prize(&[], &mut rng).is_none());
    }

    #[test]
    fn test_weights_are_respected() {
        let prizes = [
            PrizeConfig { id: "COMMON", name: "Common", stock: -1, probability: 99, is_triggered: false },
            PrizeConfig { id: "RARE", name: "Rare", stock: -1, probability: 1, is_triggered: false },
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let rare = (0..10_000)
            .filter(|_| pick_random_prize(&prizes, &mut rng).unwrap().id == "RARE")
            .count();
        assert!(rare > 30 && rare < 200, "rare drawn {} times", rare);
    }

    /// In-memory lock and stock counters.
    struct MemoryLockStore {
        lock: Mutex<Option<String>>,
        stocks: Mutex<HashMap<String, i64>>,
    }

    impl MemoryLockStore {
        fn new(lock: Option<&str>, stocks: &[(&str, i64)]) -> Self {
            Self {
                lock: Mutex::new(lock.map(str::to_string)),
                stocks: Mutex::new(stocks.iter().map(|(id, n)| (id.to_string(), *n)).collect()),
            }
        }

        fn stock(&self, prize_id: &str) -> Option<i64> {
            self.stocks.lock().unwrap().get(prize_id).copied()
        }
    }

    impl LockStore for MemoryLockStore {
        async fn take_prize_lock(&self) -> redis::RedisResult<Option<String>> {
            Ok(self.lock.lock().unwrap().take())
        }

        async fn decrement_stock(&self, prize_id: &str) -> redis::RedisResult<Option<i64>> {
            Ok(self.stocks.lock().unwrap().get_mut(prize_id).map(|stock| {
                *stock -= 1;
                *stock
            }))
        }

        async fn increment_stock(&self, prize_id: &str) -> redis::RedisResult<()> {
            if let Some(stock) = self.stocks.lock().unwrap().get_mut(prize_id) {
                *stock += 1;
            }
            Ok(())
        }
    }

    fn default_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    #[tokio::test]
    async fn test_lock_is_claimed_by_one_spin_only() {
        let config = default_config();
        let store = MemoryLockStore::new(Some("MK_DUCK"), &[("MK_DUCK", 5)]);

        let (first, second) = tokio::join!(
            claim_locked_prize(&store, &config),
            claim_locked_prize(&store, &config),
        );
        let claims: Vec<_> = [first.unwrap(), second.unwrap()].into_iter().flatten().collect();

        assert_eq!(claims, vec![("MK_DUCK".to_string(), "MK Duck Card".to_string())]);
        assert_eq!(store.stock("MK_DUCK"), Some(4));
        assert!(claim_locked_prize(&store, &config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unlimited_lock_is_awarded_once() {
        let config = default_config();
        let store = MemoryLockStore::new(Some("DISCOUNT_10"), &[]);

        let claim = claim_locked_prize(&store, &config).await.unwrap();
        assert_eq!(claim, Some(("DISCOUNT_10".to_string(), "10% Discount".to_string())));
        assert!(claim_locked_prize(&store, &config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_depleted_lock_restores_stock() {
        let config = default_config();
        let store = MemoryLockStore::new(Some("STARBUCKS"), &[("STARBUCKS", 0)]);

        assert!(claim_locked_prize(&store, &config).await.unwrap().is_none());
        assert_eq!(store.stock("STARBUCKS"), Some(0));
        assert!(store.lock.lock().unwrap().is_none());
    }

    #[test]
    fn test_clamp_log_limit() {
        assert_eq!(clamp_log_limit(None), 50);
        assert_eq!(clamp_log_limit(Some(0)), 50);
        assert_eq!(clamp_log_limit(Some(-3)), 50);
        assert_eq!(clamp_log_limit(Some(30)), 30);
        assert_eq!(clamp_log_limit(Some(500)), 100);
    }

    #[test]
    fn test_verify_secret() {
        let config = Config::from_lookup(|key| (key == "ADMIN_SECRET").then(|| "s3cret".to_string())).unwrap();
        assert!(verify_secret(&config, "s3cret").is_ok());
        assert!(matches!(verify_secret(&config, "guess"), Err(AppError::Unauthorized)));
        assert!(matches!(verify_secret(&config, ""), Err(AppError::Unauthorized)));
    }
}
