use redis::aio::MultiplexedConnection;
use redis::{Client as RedisClient, RedisResult};
use shared::api::{LockStatus, StockStatus};
use shared::prizes::{PrizeConfig, UNLIMITED_STOCK};
use tracing::warn;

const STOCK_KEY_PREFIX: &str = "stock:";
const LOCK_KEY: &str = "config:next_prize_lock";

pub fn stock_key(prize_id: &str) -> String {
    format!("{}{}", STOCK_KEY_PREFIX, prize_id)
}

/// Prize lock and limited stock counters.
#[derive(Clone)]
pub struct RedisRepository {
    client: RedisClient,
}

impl RedisRepository {
    /// Opens a client without touching the network.
    pub fn open(url: &str) -> RedisResult<Self> {
        Ok(Self { client: RedisClient::open(url)? })
    }

    pub async fn connect(url: &str) -> RedisResult<Self> {
        let repo = Self::open(url)?;
        repo.ping().await?;
        Ok(repo)
    }

    async fn connection(&self) -> RedisResult<MultiplexedConnection> {
        self.client.get_multiplexed_async_connection().await
    }

    pub async fn ping(&self) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Seeds the counters of limited prizes. Without `overwrite`, counters that
    /// already exist keep their value across restarts.
    pub async fn initialize_stocks(&self, prizes: &[PrizeConfig], overwrite: bool) -> RedisResult<()> {
        let mut conn = self.connection().await?;

        for prize in prizes.iter().filter(|prize| prize.is_limited()) {
            let mut cmd = redis::cmd("SET");
            cmd.arg(stock_key(prize.id)).arg(prize.stock);
            if !overwrite {
                cmd.arg("NX");
            }
            let _: redis::Value = cmd.query_async(&mut conn).await?;
        }
        Ok(())
    }

    pub async fn reset_stocks(&self, prizes: &[PrizeConfig]) -> RedisResult<()> {
        self.clear_prize_lock().await?;
        self.initialize_stocks(prizes, true).await
    }

    pub async fn prize_lock(&self) -> RedisResult<Option<String>> {
        let mut conn = self.connection().await?;
        redis::cmd("GET").arg(LOCK_KEY).query_async(&mut conn).await
    }

    /// Reads and clears the lock in one transaction, so only one spin can
    /// claim it.
    pub async fn take_prize_lock(&self) -> RedisResult<Option<String>> {
        let mut conn = self.connection().await?;
        let (locked,): (Option<String>,) = redis::pipe()
            .atomic()
            .cmd("GET").arg(LOCK_KEY)
            .cmd("DEL").arg(LOCK_KEY).ignore()
            .query_async(&mut conn)
            .await?;
        Ok(locked)
    }

    pub async fn lock_status(&self) -> RedisResult<LockStatus> {
        let locked = self.prize_lock().await?;
        Ok(LockStatus {
            is_locked: locked.is_some(),
            locked_prize_id: locked,
        })
    }

    pub async fn set_prize_lock(&self, prize_id: &str) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("SET").arg(LOCK_KEY).arg(prize_id).query_async(&mut conn).await
    }

    pub async fn clear_prize_lock(&self) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        let _: i64 = redis::cmd("DEL").arg(LOCK_KEY).query_async(&mut conn).await?;
        Ok(())
    }

    /// Takes one unit of stock. `None` means the prize is not tracked, i.e.
    /// its stock is unlimited; a negative value means it was already empty.
    pub async fn decrement_stock(&self, prize_id: &str) -> RedisResult<Option<i64>> {
        let mut conn = self.connection().await?;
        let key = stock_key(prize_id);

        let exists: i64 = redis::cmd("EXISTS").arg(&key).query_async(&mut conn).await?;
        if exists == 0 {
            return Ok(None);
        }

        let remaining: i64 = redis::cmd("DECR").arg(&key).query_async(&mut conn).await?;
        Ok(Some(remaining))
    }

    pub async fn increment_stock(&self, prize_id: &str) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        let _: i64 = redis::cmd("INCR").arg(stock_key(prize_id)).query_async(&mut conn).await?;
        Ok(())
    }

    pub async fn stock(&self, prize_id: &str) -> RedisResult<Option<i64>> {
        let mut conn = self.connection().await?;
        redis::cmd("GET").arg(stock_key(prize_id)).query_async(&mut conn).await
    }

    pub async fn stock_statuses(&self, prizes: &[PrizeConfig]) -> Vec<StockStatus> {
        let mut stocks = Vec::new();

        for prize in prizes.iter().filter(|prize| prize.is_limited()) {
            let stock = match self.stock(prize.id).await {
                Ok(Some(stock)) => stock,
                Ok(None) => i64::from(UNLIMITED_STOCK),
                Err(e) => {
                    warn!("Failed to read stock for {}: {}", prize.id, e);
                    0
                }
            };
            stocks.push(StockStatus {
                prize_id: prize.id.to_string(),
                name: prize.name.to_string(),
                stock,
                max: i64::from(prize.stock),
            });
        }

        stocks
    }
}
