//! Typed views of the service's JSON responses.
//!
//! [`RateQuery::fetch`](crate::RateQuery::fetch) returns the body as an
//! untyped [`serde_json::Value`]; these types are for callers that use
//! [`RateQuery::fetch_as`](crate::RateQuery::fetch_as) instead.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::CurrencyCode;

/// Rates for a single day, from the `latest` or `YYYY-MM-DD` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestRates {
    /// Base currency the rates are quoted against.
    pub base: String,
    /// Publication date of the rates.
    pub date: String,
    /// Units of each currency per one unit of `base`.
    pub rates: BTreeMap<String, Decimal>,
}

impl LatestRates {
    /// Get the rate for a currency.
    ///
    /// The base currency itself is always `1`, whether or not the service listed it.
    pub fn rate(&self, code: CurrencyCode) -> Option<Decimal> {
        if code.as_str() == self.base {
            return Some(Decimal::ONE);
        }
        self.rates.get(code.as_str()).copied()
    }

    /// Convert an amount between two currencies using these rates.
    ///
    /// Returns [`None`] if either currency is missing.
    pub fn convert(&self, amount: Decimal, from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        amount.checked_mul(to_rate)?.checked_div(from_rate)
    }
}

/// Rates over a period, from the `history` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRates {
    /// Base currency the rates are quoted against.
    pub base: String,
    /// First day of the period.
    pub start_at: String,
    /// Last day of the period.
    pub end_at: String,
    /// Rates keyed by date, then by currency code.
    pub rates: BTreeMap<String, BTreeMap<String, Decimal>>,
}

impl HistoricalRates {
    /// Rates for one day of the period.
    pub fn on(&self, date: &str) -> Option<&BTreeMap<String, Decimal>> {
        self.rates.get(date)
    }

    /// Dates with published rates, in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn test_latest_rates_deserialize() {
        let json = r#"{"rates":{"IDR":15745.54,"USD":1.1214},"base":"EUR","date":"2020-01-10"}"#;
        let rates: LatestRates = serde_json::from_str(json).unwrap();
        assert_eq!(rates.base, "EUR");
        assert_eq!(rates.date, "2020-01-10");
        assert_eq!(rates.rates.len(), 2);
        assert_eq!(rates.rates["USD"], Decimal::from_str("1.1214").unwrap());
    }

    #[test]
    fn test_convert() {
        let json = r#"{"rates":{"USD":2,"JPY":200},"base":"EUR","date":"2020-01-10"}"#;
        let rates: LatestRates = serde_json::from_str(json).unwrap();

        assert_eq!(rates.rate(code("EUR")), Some(Decimal::ONE));
        assert_eq!(
            rates.convert(Decimal::from(10), code("EUR"), code("USD")),
            Some(Decimal::from(20))
        );
        assert_eq!(
            rates.convert(Decimal::from(3), code("USD"), code("JPY")),
            Some(Decimal::from(300))
        );
        assert_eq!(rates.convert(Decimal::ONE, code("USD"), code("GBP")), None);
    }

    #[test]
    fn test_historical_rates_deserialize() {
        let json = r#"{
            "rates": {
                "2019-01-03": {"USD": 1.1348, "JPY": 123.18},
                "2019-01-02": {"USD": 1.1397, "JPY": 125.55}
            },
            "start_at": "2019-01-01",
            "base": "EUR",
            "end_at": "2019-01-03"
        }"#;
        let history: HistoricalRates = serde_json::from_str(json).unwrap();
        assert_eq!(history.start_at, "2019-01-01");
        assert_eq!(history.end_at, "2019-01-03");
        assert_eq!(history.dates().collect::<Vec<_>>(), ["2019-01-02", "2019-01-03"]);
        assert_eq!(
            history.on("2019-01-02").unwrap()["JPY"],
            Decimal::from_str("125.55").unwrap()
        );
        assert!(history.on("2019-01-01").is_none());
    }
}
