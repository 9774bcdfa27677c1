use std::time::Duration;

use shared::api::{SpinLog, SpinStats};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::error;

use crate::models::{NewSpinLog, SpinLogRow};

const MAX_CONNECTIONS: u32 = 10;

/// Append-only spin log.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Pool that only connects on first use.
    pub fn connect_lazy(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn log_spin(&self, entry: &NewSpinLog) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO spin_logs (instagram_id, prize_won, prize_name, was_locked, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&entry.instagram_id)
        .bind(&entry.prize_won)
        .bind(&entry.prize_name)
        .bind(entry.was_locked)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Writes the log entry in the background so the spin response is not
    /// held up by the database.
    pub fn log_spin_async(&self, entry: NewSpinLog) {
        let repo = self.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.log_spin(&entry).await {
                error!("Failed to log spin for {}: {}", entry.instagram_id, e);
            }
        });
    }

    pub async fn recent_logs(&self, limit: i64) -> Result<Vec<SpinLog>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SpinLogRow>(
            "SELECT id, instagram_id, prize_won, prize_name, was_locked, created_at
             FROM spin_logs
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SpinLog::from).collect())
    }

    pub async fn stats(&self) -> Result<SpinStats, sqlx::Error> {
        let total_spins = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM spin_logs")
            .fetch_one(&self.pool)
            .await?;

        let by_prize = sqlx::query_as::<_, (String, i64)>(
            "SELECT prize_won, COUNT(*) AS count
             FROM spin_logs
             GROUP BY prize_won
             ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .collect();

        Ok(SpinStats { total_spins, by_prize })
    }
}
