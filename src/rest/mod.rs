//! REST client for exchangeratesapi.io.
//!
//! [`RateQuery`] collects and validates the query, resolves it into a
//! [`RateRequest`], and hands that to a [`RatesTransport`]. The default
//! transport is [`ExchangeRatesClient`].
//!
//! ```rust,no_run
//! use exchange_rates_client::rest::RateQuery;
//!
//! # async fn run() -> Result<(), exchange_rates_client::ExchangeRatesError> {
//! let query = RateQuery::new().base_currency("IDR")?.at_date("2010-01-22")?;
//! assert_eq!(query.request().endpoint.path_segment(), "2010-01-22");
//! let rates = query.fetch().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
mod query;
mod request;
mod traits;

pub use client::{ExchangeRatesClient, ExchangeRatesClientBuilder};
pub use endpoints::*;
pub use query::{OutputFormat, RateQuery, RatesOutput};
pub use request::{Endpoint, RateParams, RateRequest};
pub use traits::RatesTransport;
