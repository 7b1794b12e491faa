//! HTTP client for the exchange-rate service.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::ExchangeRatesError;
use crate::rest::endpoints::{BASE_URL_ENV, EXCHANGE_RATES_BASE_URL};
use crate::rest::{RateRequest, RatesTransport};

/// The exchangeratesapi.io HTTP client.
///
/// Sends exactly one GET per call and never retries. Requests are traced
/// through `reqwest-tracing`.
///
/// # Example
///
/// ```rust,no_run
/// use exchange_rates_client::{ExchangeRatesClient, RateQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ExchangeRatesClient::builder()
///         .user_agent("my-app/1.0")
///         .build();
///
///     let rates = RateQuery::new().with_client(client).fetch().await?;
///     println!("{:?}", rates);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ExchangeRatesClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl ExchangeRatesClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> ExchangeRatesClientBuilder {
        ExchangeRatesClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a request.
    ///
    /// The endpoint segment is appended to any path already on the base URL.
    pub fn request_url(&self, request: &RateRequest) -> Result<Url, ExchangeRatesError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ExchangeRatesError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(request.endpoint.path_segment());

        let query = request.query_string()?;
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        Ok(url)
    }

    /// Make a GET request and return the body of a successful response.
    async fn get_text(&self, request: &RateRequest) -> Result<String, ExchangeRatesError> {
        let url = self.request_url(request)?;
        tracing::debug!(%url, "Requesting exchange rates");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            tracing::warn!(status = status.as_u16(), %message, "Exchange-rate service returned an error");
            return Err(ExchangeRatesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

/// Extract the message from an error body.
///
/// The service reports errors as `{"error": "..."}`; anything else non-empty
/// is returned as-is.
fn error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Some(parsed.error),
        Err(_) => {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    }
}

impl RatesTransport for ExchangeRatesClient {
    async fn get(&self, request: &RateRequest) -> Result<String, ExchangeRatesError> {
        self.get_text(request).await
    }
}

impl Default for ExchangeRatesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExchangeRatesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRatesClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`ExchangeRatesClient`].
pub struct ExchangeRatesClientBuilder {
    base_url: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ExchangeRatesClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: EXCHANGE_RATES_BASE_URL.to_string(),
            user_agent: None,
            timeout: None,
        }
    }

    /// Create a builder whose base URL comes from `EXCHANGE_RATES_BASE_URL`, if set.
    pub fn from_env() -> Self {
        let builder = Self::new();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total request timeout. Without one, reqwest's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> ExchangeRatesClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("exchange-rates-client/{}", crate::VERSION));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("exchange-rates-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        ExchangeRatesClient {
            http_client: client,
            base_url: self.base_url,
        }
    }
}

impl Default for ExchangeRatesClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{Endpoint, RateParams};
    use crate::types::{CurrencyCode, IsoDate};

    fn request(endpoint: Endpoint, params: RateParams) -> RateRequest {
        RateRequest { endpoint, params }
    }

    #[test]
    fn test_default_base_url() {
        let client = ExchangeRatesClient::new();
        assert_eq!(client.base_url(), "https://api.exchangeratesapi.io");
    }

    #[test]
    fn test_latest_url_has_no_query() {
        let client = ExchangeRatesClient::new();
        let url = client
            .request_url(&request(Endpoint::Latest, RateParams::default()))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.exchangeratesapi.io/latest");
    }

    #[test]
    fn test_date_url_with_params() {
        let client = ExchangeRatesClient::new();
        let params = RateParams {
            base: Some(CurrencyCode::parse("IDR").unwrap()),
            ..Default::default()
        };
        let endpoint = Endpoint::OnDate(IsoDate::parse("2010-01-22").unwrap());
        let url = client.request_url(&request(endpoint, params)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.exchangeratesapi.io/2010-01-22?base=IDR"
        );
    }

    #[test]
    fn test_base_url_path_is_preserved() {
        let client = ExchangeRatesClient::builder()
            .base_url("http://localhost:8080/proxy/")
            .build();
        let url = client
            .request_url(&request(Endpoint::Latest, RateParams::default()))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/latest");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = ExchangeRatesClient::builder().base_url("not a url").build();
        let err = client
            .request_url(&request(Endpoint::Latest, RateParams::default()))
            .unwrap_err();
        assert!(matches!(err, ExchangeRatesError::Url(_)));

        let client = ExchangeRatesClient::builder()
            .base_url("mailto:rates@example.com")
            .build();
        let err = client
            .request_url(&request(Endpoint::Latest, RateParams::default()))
            .unwrap_err();
        assert!(matches!(err, ExchangeRatesError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error":"Base 'XYZ' is not supported."}"#).as_deref(),
            Some("Base 'XYZ' is not supported.")
        );
        assert_eq!(error_message("Bad Gateway\n").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message("   "), None);
    }

    #[test]
    fn test_debug_output() {
        let client = ExchangeRatesClient::builder()
            .base_url("http://127.0.0.1:1")
            .build();
        let debug = format!("{:?}", client);
        assert!(debug.contains("ExchangeRatesClient"));
        assert!(debug.contains("http://127.0.0.1:1"));
    }
}
