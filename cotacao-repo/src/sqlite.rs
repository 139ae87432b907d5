//! SQLite rate store adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::future::Future;
use std::str::FromStr;

use cotacao_types::{Deadline, ExchangeRate, RateStore, StoreError, StoredRate};

use crate::types::DbStoredRate;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Rate Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite rate store.
///
/// Holds connect options only: every call opens its own connection, runs a
/// single statement and closes it again. There is no shared pool. Inserts
/// run in an explicit transaction that only commits inside the deadline.
pub struct SqliteRateStore {
    options: SqliteConnectOptions,
}

impl SqliteRateStore {
    /// Opens (or creates) the database and ensures the schema exists.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let store = Self { options };
        store.create_schema().await?;

        tracing::debug!("SQLite rate store ready at {}", database_url);
        Ok(store)
    }

    /// Creates the `exchange_rate` table if it does not exist yet.
    pub async fn create_schema(&self) -> anyhow::Result<()> {
        let ddl = include_str!("../migrations/0001_create_exchange_rate.sql");

        let mut conn = self.options.connect().await?;
        sqlx::query(ddl).execute(&mut conn).await?;
        conn.close().await?;

        Ok(())
    }

    /// Opens a connection, runs `op` on it and always closes it afterwards.
    ///
    /// The whole acquisition, including the connect itself, is bounded by
    /// `deadline`.
    async fn with_connection<T, F, Fut>(&self, deadline: Deadline, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(SqliteConnection) -> Fut,
        Fut: Future<Output = (SqliteConnection, Result<T, sqlx::Error>)>,
    {
        if deadline.is_expired() {
            return Err(StoreError::PersistTimeout);
        }

        let scoped = async {
            let conn = self.options.connect().await?;
            let (conn, result) = op(conn).await;
            if let Err(e) = conn.close().await {
                tracing::warn!("Failed to close SQLite connection: {}", e);
            }
            result
        };

        match tokio::time::timeout_at(tokio::time::Instant::from_std(deadline.instant()), scoped)
            .await
        {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StoreError::Persist(e.to_string())),
            Err(_) => Err(StoreError::PersistTimeout),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RateStore implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateStore for SqliteRateStore {
    #[tracing::instrument(skip(self, rate), fields(bid = %rate.bid, budget = %deadline))]
    async fn save(
        &self,
        deadline: Deadline,
        rate: &ExchangeRate,
    ) -> Result<StoredRate, StoreError> {
        let bid = rate.bid.clone();

        let id = self
            .with_connection(deadline, |mut conn| {
                let bid = bid.clone();
                async move {
                    // A dropped transaction queues its ROLLBACK behind the
                    // INSERT on the connection worker, so a write abandoned
                    // at the deadline never becomes visible.
                    let result = async {
                        let mut tx = conn.begin().await?;
                        let done = sqlx::query(r#"INSERT INTO exchange_rate (bid) VALUES (?)"#)
                            .bind(bid)
                            .execute(&mut *tx)
                            .await?;
                        tx.commit().await?;
                        Ok::<_, sqlx::Error>(done.last_insert_rowid())
                    }
                    .await;
                    (conn, result)
                }
            })
            .await
            .inspect_err(|e| tracing::warn!("Rate not persisted: {}", e))?;

        tracing::debug!(id, "Rate persisted");
        Ok(StoredRate { id, bid })
    }

    async fn list(&self, deadline: Deadline) -> Result<Vec<StoredRate>, StoreError> {
        let rows = self
            .with_connection(deadline, |mut conn| async move {
                let result = sqlx::query_as::<_, DbStoredRate>(
                    r#"SELECT id, bid FROM exchange_rate ORDER BY id ASC"#,
                )
                .fetch_all(&mut conn)
                .await;
                (conn, result)
            })
            .await?;

        Ok(rows.into_iter().map(DbStoredRate::into_domain).collect())
    }
}
