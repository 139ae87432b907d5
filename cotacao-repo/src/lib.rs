//! # Cotacao Repository
//!
//! Storage adapter for the exchange-rate service.
//! This crate provides the SQLite adapter that implements the `RateStore` port.

pub mod sqlite;

mod types;


pub use sqlite::SqliteRateStore;

/// Build and initialize a rate store from a database URL.
///
/// This function:
/// 1. Creates the database file (and its directory) if missing
/// 2. Creates the `exchange_rate` table if absent
/// 3. Returns a ready-to-use `SqliteRateStore`
///
/// # Examples
///
/// ```ignore
/// let store = build_store("sqlite://database.db").await?;
/// ```
pub async fn build_store(database_url: &str) -> anyhow::Result<SqliteRateStore> {
    SqliteRateStore::new(database_url).await
}
