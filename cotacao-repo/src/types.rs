//! Database row types.

use sqlx::FromRow;

use cotacao_types::StoredRate;

/// `exchange_rate` row from database.
#[derive(FromRow)]
pub struct DbStoredRate {
    pub id: i64,
    // Column is nullable in the schema even though inserts always bind a value.
    pub bid: Option<String>,
}

impl DbStoredRate {
    pub fn into_domain(self) -> StoredRate {
        StoredRate {
            id: self.id,
            bid: self.bid.unwrap_or_default(),
        }
    }
}
