//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, stubs, etc.

use crate::domain::{Deadline, ExchangeRate};
use crate::error::ProviderError;

/// Port trait for upstream exchange rate sources.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the current quotation.
    ///
    /// Implementations may tighten `deadline` further but must never exceed
    /// it. Exactly one upstream call is made; there is no retry.
    async fn fetch(&self, deadline: Deadline) -> Result<ExchangeRate, ProviderError>;
}
