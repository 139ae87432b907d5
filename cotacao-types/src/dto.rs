//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::ExchangeRate;

/// Header carrying the caller's remaining budget in milliseconds.
///
/// HTTP has no standard deadline propagation; a caller that wants its own
/// deadline honoured by the server sends it here.
pub const REQUEST_TIMEOUT_HEADER: &str = "x-request-timeout-ms";

/// Success body of `GET /cotacao`: only the bid is projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    pub bid: String,
}

impl From<&ExchangeRate> for BidResponse {
    fn from(rate: &ExchangeRate) -> Self {
        Self {
            bid: rate.bid.clone(),
        }
    }
}
