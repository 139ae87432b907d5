//! # Cotacao Types
//!
//! Domain types and port traits for the exchange-rate service.
//! This crate has ZERO external IO dependencies - only data structures,
//! deadline arithmetic, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ExchangeRate, StoredRate, Deadline)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Provider, store and service error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Deadline, ExchangeRate, StoredRate};
pub use dto::{BidResponse, REQUEST_TIMEOUT_HEADER};
pub use error::{ProviderError, ServiceError, StoreError};
pub use ports::{RateProvider, RateStore};
