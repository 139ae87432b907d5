//! AwesomeAPI exchange rate provider.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use cotacao_types::{Deadline, ExchangeRate, ProviderError, RateProvider};

/// Latest USD-BRL quotation.
pub const DEFAULT_ENDPOINT: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Ceiling for one upstream call, measured from the call's own start.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(200);

/// Fetches quotations from an AwesomeAPI-style endpoint.
///
/// The endpoint answers with an object keyed by pair name, e.g.
/// `{"USDBRL": {"code": "USD", "codein": "BRL", "name": "...", "bid": "5.00"}}`.
pub struct AwesomeApiProvider {
    endpoint: String,
    timeout: Duration,
    http: Client,
}

impl AwesomeApiProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Overrides the per-call ceiling.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self) -> Result<ExchangeRate, ProviderError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ProviderError::UpstreamUnavailable(e.to_string()))?;

        tracing::debug!(status = %response.status(), "Received upstream response");

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::UpstreamUnavailable(e.to_string()))?;

        first_entry(&body)
    }
}

/// Picks one entry from the pair-name mapping.
///
/// The upstream is expected to return exactly one pair. Should it ever return
/// more, which one is taken is unspecified: `HashMap` iteration order is
/// randomized per process.
fn first_entry(body: &[u8]) -> Result<ExchangeRate, ProviderError> {
    let pairs: HashMap<String, ExchangeRate> = serde_json::from_slice(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    let rate = pairs.into_values().next().ok_or(ProviderError::NoData)?;
    if rate.bid.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "pair entry has an empty bid".into(),
        ));
    }

    Ok(rate)
}

#[async_trait]
impl RateProvider for AwesomeApiProvider {
    #[tracing::instrument(
        name = "UpstreamRateFetch",
        skip(self),
        fields(endpoint = %self.endpoint, budget = %deadline)
    )]
    async fn fetch(&self, deadline: Deadline) -> Result<ExchangeRate, ProviderError> {
        let deadline = deadline.within(self.timeout);
        if deadline.is_expired() {
            return Err(ProviderError::UpstreamUnavailable(
                "deadline exceeded before the request was sent".into(),
            ));
        }

        let started = std::time::Instant::now();
        match tokio::time::timeout_at(
            tokio::time::Instant::from_std(deadline.instant()),
            self.request(),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderError::UpstreamUnavailable(format!(
                "deadline exceeded after {}ms",
                started.elapsed().as_millis()
            ))),
        }
    }
}
