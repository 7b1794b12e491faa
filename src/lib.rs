//! # Exchange Rates Client
//!
//! A fluent async Rust client for the [exchangeratesapi.io](https://exchangeratesapi.io)
//! currency exchange-rate service.
//!
//! ## Features
//!
//! - Chainable query building with validation at each step
//! - Latest rates, rates on a given day, and rates over a period
//! - Output as parsed JSON, normalized JSON text, or typed structs
//! - Decimal precision for typed rates with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exchange_rates_client::RateQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rates = RateQuery::new()
//!         .base_currency("IDR")?
//!         .rates(["USD", "EUR"])?
//!         .fetch()
//!         .await?;
//!     println!("Rates: {:?}", rates);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::ExchangeRatesError;
pub use rest::{ExchangeRatesClient, OutputFormat, RateQuery, RatesOutput};
pub use types::{CurrencyCode, IsoDate};

/// Result type alias using ExchangeRatesError
pub type Result<T> = std::result::Result<T, ExchangeRatesError>;

/// Crate version, sent in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
