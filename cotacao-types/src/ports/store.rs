//! Rate store port.
//!
//! The storage behind this trait is an append-only log of bids.

use crate::domain::{Deadline, ExchangeRate, StoredRate};
use crate::error::StoreError;

/// Port trait for rate persistence.
#[async_trait::async_trait]
pub trait RateStore: Send + Sync + 'static {
    /// Appends one row holding `rate.bid`.
    ///
    /// Not idempotent: saving the same rate twice yields two rows. If the
    /// write does not finish before `deadline` the call fails with
    /// [`StoreError::PersistTimeout`] and no row is visible.
    async fn save(&self, deadline: Deadline, rate: &ExchangeRate)
    -> Result<StoredRate, StoreError>;

    /// Lists every stored row in insertion order.
    async fn list(&self, deadline: Deadline) -> Result<Vec<StoredRate>, StoreError>;
}
