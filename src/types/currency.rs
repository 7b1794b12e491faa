//! Currency codes accepted by the exchange-rate service.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ExchangeRatesError;

/// Currency codes the client accepts, in the order the service documents them.
///
/// `BHP` is not an ISO 4217 code but is kept as published.
pub const SUPPORTED_CURRENCIES: [&str; 33] = [
    "USD", "GBP", "EUR", "JPY", "BGN", "CZK", "DKK", "HUF", "PLN", "RON", "SEK", "CHF", "ISK",
    "NOK", "HRK", "RUB", "TRY", "AUD", "BRL", "CAD", "CNY", "HKD", "IDR", "ILS", "INR", "KRW",
    "MXN", "MYR", "NZD", "BHP", "SGD", "THB", "ZAR",
];

/// A validated, uppercase currency code from [`SUPPORTED_CURRENCIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Parse a currency code.
    ///
    /// Surrounding whitespace is trimmed, the rest must be exactly three ASCII
    /// letters, and the uppercased code must be in [`SUPPORTED_CURRENCIES`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use exchange_rates_client::types::CurrencyCode;
    ///
    /// let code = CurrencyCode::parse(" idr ").unwrap();
    /// assert_eq!(code.as_str(), "IDR");
    /// assert!(CurrencyCode::parse("rupiah").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExchangeRatesError> {
        let mut bytes: [u8; 3] = input
            .trim()
            .as_bytes()
            .try_into()
            .ok()
            .filter(|bytes: &[u8; 3]| bytes.iter().all(u8::is_ascii_alphabetic))
            .ok_or_else(|| ExchangeRatesError::InvalidCurrencyFormat {
                code: input.to_string(),
            })?;
        bytes.make_ascii_uppercase();

        let code = Self(bytes);
        if !SUPPORTED_CURRENCIES.contains(&code.as_str()) {
            return Err(ExchangeRatesError::UnsupportedCurrency {
                code: code.as_str().to_string(),
            });
        }

        Ok(code)
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for CurrencyCode {
    type Err = ExchangeRatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = ExchangeRatesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One currency code or an ordered list of them, as accepted by
/// [`RateQuery::rates`](crate::RateQuery::rates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbols {
    /// A single code
    One(String),
    /// Several codes, in request order
    Many(Vec<String>),
}

impl Symbols {
    /// Validate every code in order, stopping at the first invalid one.
    pub fn parse(&self) -> Result<Vec<CurrencyCode>, ExchangeRatesError> {
        match self {
            Symbols::One(code) => Ok(vec![CurrencyCode::parse(code)?]),
            Symbols::Many(codes) => codes.iter().map(|c| CurrencyCode::parse(c)).collect(),
        }
    }
}

impl From<&str> for Symbols {
    fn from(code: &str) -> Self {
        Symbols::One(code.to_string())
    }
}

impl From<String> for Symbols {
    fn from(code: String) -> Self {
        Symbols::One(code)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Symbols {
    fn from(codes: Vec<S>) -> Self {
        Symbols::Many(codes.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Symbols {
    fn from(codes: &[S]) -> Self {
        Symbols::Many(codes.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Symbols {
    fn from(codes: [S; N]) -> Self {
        Symbols::Many(codes.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_code_parses_in_any_case() {
        for code in SUPPORTED_CURRENCIES {
            assert_eq!(CurrencyCode::parse(code).unwrap().as_str(), code);

            let lower = format!("  {}\t", code.to_lowercase());
            assert_eq!(CurrencyCode::parse(&lower).unwrap().as_str(), code);
        }
    }

    #[test]
    fn test_supported_list_is_verbatim() {
        assert_eq!(SUPPORTED_CURRENCIES.len(), 33);
        assert!(SUPPORTED_CURRENCIES.contains(&"BHP"));
        assert!(!SUPPORTED_CURRENCIES.contains(&"BHD"));
    }

    #[test]
    fn test_invalid_format() {
        for input in [
            "", "   ", "US", "USDX", "rupiah", "U5D", "US D", "ÜSD", "12", "ſek", "ısk", "ＵＳＤ",
        ] {
            match CurrencyCode::parse(input) {
                Err(ExchangeRatesError::InvalidCurrencyFormat { code }) => assert_eq!(code, input),
                other => panic!("unexpected result for {input:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unsupported_currency() {
        for input in ["XYZ", "ida", "bhd"] {
            match CurrencyCode::parse(input) {
                Err(ExchangeRatesError::UnsupportedCurrency { code }) => {
                    assert_eq!(code, input.to_uppercase())
                }
                other => panic!("unexpected result for {input:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_serialize_as_string() {
        let code: CurrencyCode = "eur".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""EUR""#);
        assert_eq!(code.to_string(), "EUR");
    }

    #[test]
    fn test_symbols_conversions() {
        assert_eq!(Symbols::from("usd"), Symbols::One("usd".to_string()));
        assert_eq!(
            Symbols::from(["IDR", "USD"]),
            Symbols::Many(vec!["IDR".to_string(), "USD".to_string()])
        );
        assert_eq!(
            Symbols::from(vec!["IDR".to_string()]),
            Symbols::Many(vec!["IDR".to_string()])
        );
    }

    #[test]
    fn test_symbols_parse_keeps_order_and_duplicates() {
        let codes = Symbols::from(["usd", "IDR", "USD"]).parse().unwrap();
        let codes: Vec<&str> = codes.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(codes, ["USD", "IDR", "USD"]);
    }

    #[test]
    fn test_symbols_parse_stops_at_first_error() {
        let err = Symbols::from(["USD", "XYZ", "rupiah"]).parse().unwrap_err();
        assert!(matches!(err, ExchangeRatesError::UnsupportedCurrency { code } if code == "XYZ"));
    }
}
