//! Rate Application Service
//!
//! Orchestrates one "get current rate" request through the provider and store
//! ports. Contains NO infrastructure logic - only the deadline budget and the
//! fetch-then-persist sequence.
//!
//! ```text
//! Start -> Fetching -> Persisting -> Responded(success)
//!              \            \
//!               `------------`--> Responded(error)
//! ```

use std::time::Duration;

use cotacao_types::{BidResponse, Deadline, RateProvider, RateStore, ServiceError, StoredRate};

/// Deadline ceilings applied by the service itself.
///
/// The upstream fetch ceiling belongs to the provider adapter, which tightens
/// the request deadline on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTimeouts {
    /// Ceiling for the whole request, measured from its start.
    pub request: Duration,
    /// Ceiling for the persistence step, measured from when it begins.
    pub persist: Duration,
}

impl Default for ServiceTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(300),
            persist: Duration::from_millis(10),
        }
    }
}

/// Application service for exchange-rate requests.
///
/// Generic over the provider and store ports - the adapters are injected at
/// compile time, so tests can swap in stubs without code changes.
pub struct RateService<P: RateProvider, S: RateStore> {
    provider: P,
    store: S,
    timeouts: ServiceTimeouts,
}

impl<P: RateProvider, S: RateStore> RateService<P, S> {
    /// Creates a new rate service with default timeouts.
    pub fn new(provider: P, store: S) -> Self {
        Self::with_timeouts(provider, store, ServiceTimeouts::default())
    }

    pub fn with_timeouts(provider: P, store: S, timeouts: ServiceTimeouts) -> Self {
        Self {
            provider,
            store,
            timeouts,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timeouts(&self) -> ServiceTimeouts {
        self.timeouts
    }

    /// Fetches the current rate, persists it and projects the bid.
    ///
    /// `inbound` is the caller's own deadline, if it sent one. The request
    /// deadline is the earlier of it and the service's request ceiling; the
    /// persistence deadline is chained onto that, never added to it.
    pub async fn current_rate(
        &self,
        inbound: Option<Deadline>,
    ) -> Result<BidResponse, ServiceError> {
        let own = Deadline::after(self.timeouts.request);
        let deadline = inbound.map_or(own, |caller| caller.earliest(own));

        tracing::debug!(budget = %deadline, "Fetching exchange rate");
        let rate = self
            .provider
            .fetch(deadline)
            .await
            .inspect_err(|e| tracing::warn!("Exchange rate fetch failed: {}", e))?;

        let persist_deadline = deadline.within(self.timeouts.persist);

        tracing::debug!(bid = %rate.bid, budget = %persist_deadline, "Persisting exchange rate");
        self.store
            .save(persist_deadline, &rate)
            .await
            .inspect_err(|e| tracing::warn!("Exchange rate persistence failed: {}", e))?;

        tracing::info!(bid = %rate.bid, "Exchange rate served");
        Ok(BidResponse::from(&rate))
    }

    /// Lists every persisted rate, oldest first.
    pub async fn history(&self) -> Result<Vec<StoredRate>, ServiceError> {
        let deadline = Deadline::after(self.timeouts.request);
        self.store.list(deadline).await.map_err(Into::into)
    }
}
