//! Fluent exchange-rate query builder.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ExchangeRatesError;
use crate::rest::{Endpoint, ExchangeRatesClient, RateParams, RateRequest, RatesTransport};
use crate::types::{CurrencyCode, IsoDate, Symbols};

/// Output encoding of [`RateQuery::fetch`], fixed when the query is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Parsed JSON value
    #[default]
    Json,
    /// JSON re-serialized to a compact string
    Text,
}

/// The result of [`RateQuery::fetch`].
#[derive(Debug, Clone, PartialEq)]
pub enum RatesOutput {
    /// Parsed response body
    Json(Value),
    /// Parsed response body serialized back to text
    Text(String),
}

impl RatesOutput {
    /// Get the parsed value, if this is [`RatesOutput::Json`].
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RatesOutput::Json(value) => Some(value),
            RatesOutput::Text(_) => None,
        }
    }

    /// Get the text, if this is [`RatesOutput::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RatesOutput::Json(_) => None,
            RatesOutput::Text(text) => Some(text),
        }
    }

    /// Convert into a JSON value, parsing the text form if needed.
    pub fn into_json(self) -> Result<Value, ExchangeRatesError> {
        match self {
            RatesOutput::Json(value) => Ok(value),
            RatesOutput::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

/// Builds and runs a single exchange-rate query.
///
/// Every configuration method validates its input immediately and returns
/// the updated query, so a chain stops at the first bad value. Fetching does
/// not consume or reset the query; calling [`fetch`](Self::fetch) again sends
/// the same request again.
///
/// # Example
///
/// ```rust,no_run
/// use exchange_rates_client::RateQuery;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let rates = RateQuery::new()
///         .base_currency("usd")?
///         .rates(["IDR", "EUR"])?
///         .period("2019-01-01", "2019-01-03")?
///         .fetch()
///         .await?;
///     println!("{:?}", rates);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RateQuery<T = ExchangeRatesClient> {
    transport: T,
    format: OutputFormat,
    base_currency: Option<CurrencyCode>,
    symbols: Vec<CurrencyCode>,
    date: Option<IsoDate>,
    period: Option<(IsoDate, IsoDate)>,
}

impl RateQuery<ExchangeRatesClient> {
    /// Create a query that returns parsed JSON, using the default client.
    pub fn new() -> Self {
        Self::with_format(OutputFormat::Json)
    }

    /// Create a query that returns JSON text, using the default client.
    pub fn text() -> Self {
        Self::with_format(OutputFormat::Text)
    }

    /// Create a query with the given output format, using the default client.
    pub fn with_format(format: OutputFormat) -> Self {
        RateQuery::with_transport(ExchangeRatesClient::new(), format)
    }
}

impl Default for RateQuery<ExchangeRatesClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RateQuery<T> {
    /// Create a query over a custom transport.
    pub fn with_transport(transport: T, format: OutputFormat) -> Self {
        Self {
            transport,
            format,
            base_currency: None,
            symbols: Vec::new(),
            date: None,
            period: None,
        }
    }

    /// Replace the transport, keeping everything configured so far.
    pub fn with_client<U>(self, transport: U) -> RateQuery<U> {
        RateQuery {
            transport,
            format: self.format,
            base_currency: self.base_currency,
            symbols: self.symbols,
            date: self.date,
            period: self.period,
        }
    }

    /// Set the base currency.
    ///
    /// # Errors
    ///
    /// [`ExchangeRatesError::InvalidCurrencyFormat`] if `code` is not three
    /// letters after trimming, [`ExchangeRatesError::UnsupportedCurrency`] if
    /// it is not in [`SUPPORTED_CURRENCIES`](crate::types::SUPPORTED_CURRENCIES).
    pub fn base_currency(mut self, code: &str) -> Result<Self, ExchangeRatesError> {
        self.base_currency = Some(CurrencyCode::parse(code)?);
        Ok(self)
    }

    /// Add one or more target currencies.
    ///
    /// Codes are appended in order, after any added earlier; duplicates are
    /// kept. Nothing is appended unless every code is valid.
    ///
    /// # Errors
    ///
    /// The first error from validating the codes, as for
    /// [`base_currency`](Self::base_currency).
    pub fn rates(mut self, codes: impl Into<Symbols>) -> Result<Self, ExchangeRatesError> {
        let symbols: Symbols = codes.into();
        self.symbols.extend(symbols.parse()?);
        Ok(self)
    }

    /// Request the rates published on one day.
    ///
    /// # Errors
    ///
    /// [`ExchangeRatesError::InvalidDateFormat`] if `date` is not `YYYY-MM-DD`.
    pub fn at_date(mut self, date: &str) -> Result<Self, ExchangeRatesError> {
        self.date = Some(IsoDate::parse(date)?);
        Ok(self)
    }

    /// Request the rates for every day from `from` to `to`.
    ///
    /// Takes priority over [`at_date`](Self::at_date) when both are set.
    ///
    /// # Errors
    ///
    /// [`ExchangeRatesError::InvalidDateFormat`] for `from` if it is invalid,
    /// otherwise for `to`.
    pub fn period(mut self, from: &str, to: &str) -> Result<Self, ExchangeRatesError> {
        let from = IsoDate::parse(from)?;
        let to = IsoDate::parse(to)?;
        self.period = Some((from, to));
        Ok(self)
    }

    /// The configured base currency.
    pub fn base(&self) -> Option<CurrencyCode> {
        self.base_currency
    }

    /// The configured target currencies, in request order.
    pub fn symbols(&self) -> &[CurrencyCode] {
        &self.symbols
    }

    /// The configured single date.
    pub fn date(&self) -> Option<&IsoDate> {
        self.date.as_ref()
    }

    /// The configured period.
    pub fn date_range(&self) -> Option<(&IsoDate, &IsoDate)> {
        self.period.as_ref().map(|(from, to)| (from, to))
    }

    /// The output format chosen at construction.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Resolve the configuration into the request [`fetch`](Self::fetch) would send.
    ///
    /// A period wins over a single date, which wins over `latest`.
    pub fn request(&self) -> RateRequest {
        let mut params = RateParams {
            base: self.base_currency,
            symbols: self.symbols.clone(),
            ..Default::default()
        };

        let endpoint = match (&self.period, &self.date) {
            (Some((from, to)), _) => {
                params.start_at = Some(from.clone());
                params.end_at = Some(to.clone());
                Endpoint::History
            }
            (None, Some(date)) => Endpoint::OnDate(date.clone()),
            (None, None) => Endpoint::Latest,
        };

        RateRequest { endpoint, params }
    }
}

impl<T: RatesTransport> RateQuery<T> {
    /// Send the query and return the response in the configured format.
    ///
    /// With [`OutputFormat::Text`] the body is parsed and serialized again, so
    /// whitespace is normalized rather than preserved.
    ///
    /// # Errors
    ///
    /// Transport and status errors from the service, or
    /// [`ExchangeRatesError::MalformedResponse`] if the body is not JSON.
    pub async fn fetch(&self) -> Result<RatesOutput, ExchangeRatesError> {
        let value = self.fetch_value().await?;
        match self.format {
            OutputFormat::Json => Ok(RatesOutput::Json(value)),
            OutputFormat::Text => Ok(RatesOutput::Text(serde_json::to_string(&value)?)),
        }
    }

    /// Send the query and deserialize the response into `R`, ignoring the output format.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use exchange_rates_client::RateQuery;
    /// use exchange_rates_client::types::LatestRates;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let latest: LatestRates = RateQuery::new().rates("USD")?.fetch_as().await?;
    ///     println!("1 {} = {:?} USD", latest.base, latest.rates.get("USD"));
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_as<R: DeserializeOwned>(&self) -> Result<R, ExchangeRatesError> {
        let value = self.fetch_value().await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn fetch_value(&self) -> Result<Value, ExchangeRatesError> {
        let request = self.request();
        tracing::debug!(endpoint = %request.endpoint, params = ?request.params, "Fetching exchange rates");

        let body = self.transport.get(&request).await?;
        serde_json::from_str(&body).map_err(|e| {
            ExchangeRatesError::MalformedResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e, body
            ))
        })
    }
}
