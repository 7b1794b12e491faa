//! Resolved requests: endpoint path plus query parameters.

use std::fmt;

use serde::Serialize;

use crate::rest::endpoints::{HISTORY, LATEST};
use crate::types::serde_helpers::comma_separated;
use crate::types::{CurrencyCode, IsoDate};

/// The endpoint a query resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Most recent published rates.
    Latest,
    /// Rates published on a specific day.
    OnDate(IsoDate),
    /// Rates for every day in an inclusive period; the bounds travel as
    /// `start_at`/`end_at` in [`RateParams`].
    History,
}

impl Endpoint {
    /// The URL path segment for this endpoint.
    ///
    /// A single date is sent as the path segment itself.
    pub fn path_segment(&self) -> &str {
        match self {
            Endpoint::Latest => LATEST,
            Endpoint::OnDate(date) => date.as_str(),
            Endpoint::History => HISTORY,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Query-string parameters. Unset fields are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateParams {
    /// First day of a history period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<IsoDate>,
    /// Last day of a history period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<IsoDate>,
    /// Base currency; the service defaults to EUR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<CurrencyCode>,
    /// Currencies to restrict the response to; empty means all.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "comma_separated::serialize"
    )]
    pub symbols: Vec<CurrencyCode>,
}

/// A fully resolved request, ready to hand to a
/// [`RatesTransport`](crate::rest::RatesTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    /// Which endpoint to call.
    pub endpoint: Endpoint,
    /// Query parameters to send with it.
    pub params: RateParams,
}

impl RateRequest {
    /// Encode the parameters as a URL query string (without the leading `?`).
    pub fn query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> IsoDate {
        IsoDate::parse(s).unwrap()
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(Endpoint::Latest.path_segment(), "latest");
        assert_eq!(Endpoint::OnDate(date("2010-01-22")).path_segment(), "2010-01-22");
        assert_eq!(Endpoint::History.to_string(), "history");
    }

    #[test]
    fn test_empty_params_encode_to_nothing() {
        let request = RateRequest {
            endpoint: Endpoint::Latest,
            params: RateParams::default(),
        };
        assert_eq!(request.query_string().unwrap(), "");
    }

    #[test]
    fn test_all_params_encoded() {
        let request = RateRequest {
            endpoint: Endpoint::History,
            params: RateParams {
                start_at: Some(date("2019-01-01")),
                end_at: Some(date("2019-01-03")),
                base: Some(CurrencyCode::parse("JPY").unwrap()),
                symbols: vec![
                    CurrencyCode::parse("IDR").unwrap(),
                    CurrencyCode::parse("USD").unwrap(),
                ],
            },
        };
        assert_eq!(
            request.query_string().unwrap(),
            "start_at=2019-01-01&end_at=2019-01-03&base=JPY&symbols=IDR%2CUSD"
        );
    }
}
