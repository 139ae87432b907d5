//! # Cotacao Client SDK
//!
//! A typed Rust client for the exchange-rate API, plus the writer for the
//! `cotacao.txt` output file.

use std::path::Path;
use std::time::Duration;

use cotacao_types::{Deadline, ExchangeRate, REQUEST_TIMEOUT_HEADER};
use reqwest::Client;

/// Default address of a locally running rate service.
pub const DEFAULT_URL: &str = "http://localhost:8080/cotacao";

/// Budget for one request, covering connect, headers and body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request deadline of {0:?} exceeded")]
    RequestTimeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Only an expired request deadline is unrecoverable; every other error
    /// is reported and the caller carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClientError::RequestTimeout(_))
    }
}

/// Exchange-rate API client.
pub struct RateClient {
    url: String,
    timeout: Duration,
    http: Client,
}

impl RateClient {
    /// Creates a new client for the given `/cotacao` URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Sets the request budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Requests the current rate.
    ///
    /// The server only projects `bid`; the remaining fields decode empty.
    pub async fn fetch_rate(&self) -> Result<ExchangeRate, ClientError> {
        let deadline = Deadline::after(self.timeout);

        let request = async {
            let resp = self
                .http
                .get(&self.url)
                .header(
                    REQUEST_TIMEOUT_HEADER,
                    deadline.remaining().as_millis().to_string(),
                )
                .send()
                .await?;
            self.handle_response(resp).await
        };

        match tokio::time::timeout_at(tokio::time::Instant::from_std(deadline.instant()), request)
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ClientError::RequestTimeout(self.timeout)),
        }
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<ExchangeRate, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: body.trim_end().to_string(),
            })
        }
    }
}

/// Renders the file content for `rate`: `Dólar:{code:.. codein:.. name:.. bid:..}`.
pub fn render_rate(rate: &ExchangeRate) -> String {
    format!("Dólar:{}", rate)
}

/// Creates or truncates `path` and writes the rendered rate into it.
pub async fn write_rate_file(
    path: impl AsRef<Path>,
    rate: &ExchangeRate,
) -> Result<(), ClientError> {
    tokio::fs::write(path, render_rate(rate)).await?;
    Ok(())
}
