//! Outbound adapters (upstream services the application drives).

mod awesome_api;

pub use awesome_api::{AwesomeApiProvider, DEFAULT_ENDPOINT, DEFAULT_FETCH_TIMEOUT};
