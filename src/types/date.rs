//! `YYYY-MM-DD` dates as accepted by the exchange-rate service.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ExchangeRatesError;

/// A date string in `YYYY-MM-DD` form.
///
/// Validation is purely lexical: the month must be `01`-`12` and the day
/// `01`-`31`, but the day is not checked against the month, so `2021-02-30`
/// is accepted and passed through to the service unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoDate(String);

impl IsoDate {
    /// Parse a date string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exchange_rates_client::types::IsoDate;
    ///
    /// assert!(IsoDate::parse("2010-01-22").is_ok());
    /// assert!(IsoDate::parse("2021-02-30").is_ok());
    /// assert!(IsoDate::parse("2010").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExchangeRatesError> {
        if is_valid_date(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ExchangeRatesError::InvalidDateFormat {
                date: input.to_string(),
            })
        }
    }

    /// Build from a calendar date.
    ///
    /// Fails for years that do not fit in four digits.
    pub fn from_date(date: time::Date) -> Result<Self, ExchangeRatesError> {
        let formatted = format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        );
        Self::parse(&formatted)
    }

    /// The date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let month = matches!(
        (bytes[5], bytes[6]),
        (b'0', b'1'..=b'9') | (b'1', b'0'..=b'2')
    );
    let day = matches!(
        (bytes[8], bytes[9]),
        (b'0', b'1'..=b'9') | (b'1'..=b'2', b'0'..=b'9') | (b'3', b'0'..=b'1')
    );

    month && day
}

impl FromStr for IsoDate {
    type Err = ExchangeRatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<time::Date> for IsoDate {
    type Error = ExchangeRatesError;

    fn try_from(date: time::Date) -> Result<Self, Self::Error> {
        Self::from_date(date)
    }
}

impl AsRef<str> for IsoDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
