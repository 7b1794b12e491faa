//! Error types for the exchange-rates client library.

use thiserror::Error;

/// The main error type for all exchange-rate query operations.
///
/// Validation variants are returned by the configuration methods of
/// [`RateQuery`](crate::RateQuery) at the call site; the remaining variants only
/// come out of a fetch.
#[derive(Error, Debug)]
pub enum ExchangeRatesError {
    /// Input was empty, not 3 characters, or contained non-letters after normalization.
    #[error(
        "The specified currency code {code:?} is invalid. Please use ISO 4217 notation (e.g. IDR)."
    )]
    InvalidCurrencyFormat {
        /// The code as it was passed in
        code: String,
    },

    /// Well-formed currency code that is not in the supported list
    #[error("The specified currency code {code:?} is not currently supported.")]
    UnsupportedCurrency {
        /// The normalized (uppercased) code
        code: String,
    },

    /// Date does not match `YYYY-MM-DD`
    #[error(
        "The specified date {date:?} is invalid. Please use ISO 8601 notation (e.g. YYYY-MM-DD)."
    )]
    InvalidDateFormat {
        /// The date as it was passed in
        date: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The service answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the body, or the raw body
        message: String,
    },

    /// Response body is not valid JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Base URL cannot have path segments appended (e.g. `mailto:`)
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Query parameters could not be form-encoded
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),
}

impl ExchangeRatesError {
    /// Check if this error was raised while validating query configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCurrencyFormat { .. }
                | Self::UnsupportedCurrency { .. }
                | Self::InvalidDateFormat { .. }
        )
    }

    /// Check if this error came from the network or the upstream service.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpMiddleware(_) | Self::Api { .. })
    }
}
