//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use cotacao_hex::ServiceTimeouts;
use cotacao_hex::outbound::{DEFAULT_ENDPOINT, DEFAULT_FETCH_TIMEOUT};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub rate_api_url: String,
    pub fetch_timeout: Duration,
    pub timeouts: ServiceTimeouts,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable is optional; the defaults reproduce the fixed setup of
    /// port 8080, `./database.db` and the 300/200/10ms budgets.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = ServiceTimeouts::default();

        let port = parse_or(&lookup, "PORT", 8080)?;
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://database.db".to_string());
        let rate_api_url = lookup("RATE_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let fetch_timeout = millis_or(&lookup, "FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT)?;
        let timeouts = ServiceTimeouts {
            request: millis_or(&lookup, "REQUEST_TIMEOUT_MS", defaults.request)?,
            persist: millis_or(&lookup, "PERSIST_TIMEOUT_MS", defaults.persist)?,
        };

        Ok(Self {
            port,
            database_url,
            rate_api_url,
            fetch_timeout,
            timeouts,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value {:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}

fn millis_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> anyhow::Result<Duration> {
    let millis = parse_or(lookup, key, default.as_millis() as u64)?;
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite://database.db");
        assert_eq!(config.rate_api_url, DEFAULT_ENDPOINT);
        assert_eq!(config.fetch_timeout, Duration::from_millis(200));
        assert_eq!(config.timeouts.request, Duration::from_millis(300));
        assert_eq!(config.timeouts.persist, Duration::from_millis(10));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("DATABASE_URL", "sqlite://data/rates.db"),
            ("RATE_API_URL", "http://localhost:1234/json/last/USD-BRL"),
            ("FETCH_TIMEOUT_MS", "150"),
            ("REQUEST_TIMEOUT_MS", "1000"),
            ("PERSIST_TIMEOUT_MS", "25"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.database_url, "sqlite://data/rates.db");
        assert_eq!(config.rate_api_url, "http://localhost:1234/json/last/USD-BRL");
        assert_eq!(config.fetch_timeout, Duration::from_millis(150));
        assert_eq!(config.timeouts.request, Duration::from_secs(1));
        assert_eq!(config.timeouts.persist, Duration::from_millis(25));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = config_from(&[("PERSIST_TIMEOUT_MS", "-1")]).unwrap_err();
        assert!(err.to_string().contains("PERSIST_TIMEOUT_MS"));
    }
}
