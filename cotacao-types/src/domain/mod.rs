//! Domain models for the exchange-rate service.

pub mod deadline;
pub mod rate;

pub use deadline::Deadline;
pub use rate::{ExchangeRate, StoredRate};
