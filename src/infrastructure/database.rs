use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::domain::errors::{CrmError, CrmResult};

/// Process-wide handle to the document store
///
/// Starts out disconnected; the pool is installed exactly once by
/// [`Database::connect_with_retry`]. Until then every repository call fails
/// fast with `CrmError::Store` instead of waiting on the connection.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pool: Arc<OnceCell<PgPool>>,
}

impl Database {
    /// Creates a handle with no connection yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle around an already connected pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(OnceCell::new_with(Some(pool))),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    /// Returns the pool, or a store error while still disconnected
    pub fn pool(&self) -> CrmResult<&PgPool> {
        self.pool
            .get()
            .ok_or_else(|| CrmError::store("database not connected"))
    }

    /// Opens a pool and applies the embedded migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> CrmResult<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| CrmError::store(format!("Failed to run migrations: {}", e)))?;

        Ok(pool)
    }

    /// Connects, retrying forever on a fixed delay
    ///
    /// Intended to run in a background task while the server already accepts
    /// requests.
    pub async fn connect_with_retry(
        &self,
        database_url: &str,
        max_connections: u32,
        retry_delay: Duration,
    ) {
        let mut attempt: u64 = 1;
        loop {
            tracing::info!(attempt, "Connecting to database...");
            match Self::connect(database_url, max_connections).await {
                Ok(pool) => {
                    if self.pool.set(pool).is_err() {
                        tracing::warn!("Database handle was already connected");
                    }
                    tracing::info!("Database connected successfully");
                    return;
                }
                Err(e) => {
                    tracing::error!(
                        attempt,
                        error = %e,
                        retry_in_secs = retry_delay.as_secs(),
                        "Could not connect to database"
                    );
                    tokio::time::sleep(retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handle_is_disconnected() {
        let db = Database::new();
        assert!(!db.is_connected());
        assert!(matches!(db.pool(), Err(CrmError::Store(msg)) if msg.contains("not connected")));
    }

    #[test]
    fn clones_share_connection_state() {
        let db = Database::new();
        let clone = db.clone();
        assert!(Arc::ptr_eq(&db.pool, &clone.pool));
    }

    #[tokio::test]
    async fn retry_keeps_waiting_while_store_is_unreachable() {
        let db = Database::new();
        let handle = db.clone();
        let task = tokio::spawn(async move {
            handle
                .connect_with_retry(
                    "postgres://nobody@127.0.0.1:1/none",
                    1,
                    Duration::from_millis(10),
                )
                .await;
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!task.is_finished());
        assert!(!db.is_connected());
        task.abort();
    }
}
