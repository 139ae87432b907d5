//! Caller-supplied request deadline.
//!
//! Requests without [`REQUEST_TIMEOUT_HEADER`] carry no inbound deadline and
//! are bounded only by the service's own ceiling.

use std::convert::Infallible;
use std::time::Duration;

use axum::{extract::FromRequestParts, http::request::Parts};

pub use cotacao_types::REQUEST_TIMEOUT_HEADER;
use cotacao_types::Deadline;

/// The caller's deadline, if it sent one.
#[derive(Debug, Clone, Copy)]
pub struct InboundDeadline(pub Option<Deadline>);

fn parse_budget(value: Option<&str>) -> Option<Duration> {
    value?.trim().parse::<u64>().ok().map(Duration::from_millis)
}

impl<S: Send + Sync> FromRequestParts<S> for InboundDeadline {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(REQUEST_TIMEOUT_HEADER)
            .and_then(|v| v.to_str().ok());

        Ok(Self(parse_budget(header).map(Deadline::after)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_millis() {
        assert_eq!(parse_budget(Some("250")), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_parse_budget_trims_whitespace() {
        assert_eq!(parse_budget(Some(" 40 ")), Some(Duration::from_millis(40)));
    }

    #[test]
    fn test_parse_budget_rejects_garbage() {
        assert_eq!(parse_budget(Some("soon")), None);
        assert_eq!(parse_budget(Some("-5")), None);
    }

    #[test]
    fn test_parse_budget_missing_header() {
        assert_eq!(parse_budget(None), None);
    }
}
