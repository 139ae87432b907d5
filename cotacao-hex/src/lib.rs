//! # Cotacao Hex
//!
//! Application service layer and adapters for the exchange-rate service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (fetch, then persist, under cascading deadlines)
//! - `outbound/` - Upstream rate API adapter (reqwest)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider` and `S: RateStore`, allowing
//! different adapters (or test stubs) to be injected.

pub mod inbound;
pub mod outbound;
pub mod service;


pub use outbound::AwesomeApiProvider;
pub use service::{RateService, ServiceTimeouts};
