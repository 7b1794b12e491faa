//! Transport abstraction for the exchange-rate service.
//!
//! [`RatesTransport`] is the single seam between query building and the network:
//! "perform a GET for this request, give back the body text". This enables:
//! - Fake transports in tests that record requests and return canned bodies
//! - Wrapping the HTTP client with extra behavior
//!
//! # Example
//!
//! ```rust
//! use exchange_rates_client::ExchangeRatesError;
//! use exchange_rates_client::rest::{RateRequest, RatesTransport};
//!
//! struct Canned(&'static str);
//!
//! impl RatesTransport for Canned {
//!     async fn get(&self, _request: &RateRequest) -> Result<String, ExchangeRatesError> {
//!         Ok(self.0.to_string())
//!     }
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::error::ExchangeRatesError;
use crate::rest::RateRequest;

/// Performs one GET per resolved request and returns the raw body.
///
/// Implementations must not retry; any failure is returned to the caller as is.
pub trait RatesTransport: Send + Sync {
    /// Send the request and return the response body.
    fn get(
        &self,
        request: &RateRequest,
    ) -> impl Future<Output = Result<String, ExchangeRatesError>> + Send;
}

impl<T: RatesTransport> RatesTransport for Arc<T> {
    fn get(
        &self,
        request: &RateRequest,
    ) -> impl Future<Output = Result<String, ExchangeRatesError>> + Send {
        (**self).get(request)
    }
}
