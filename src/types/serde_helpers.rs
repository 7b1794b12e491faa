//! Serde helpers for the service's query-string conventions.

use std::fmt::Display;

use serde::Serializer;

/// Serialize a list as a single comma-separated string, keeping order and duplicates.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use exchange_rates_client::types::serde_helpers::comma_separated;
///
/// #[derive(Serialize)]
/// struct Params {
///     #[serde(serialize_with = "comma_separated::serialize")]
///     symbols: Vec<&'static str>,
/// }
///
/// let params = Params { symbols: vec!["USD", "IDR", "USD"] };
/// let query = serde_urlencoded::to_string(&params).unwrap();
/// assert_eq!(query, "symbols=USD%2CIDR%2CUSD");
/// ```
pub mod comma_separated {
    use super::*;

    /// Serialize a slice as a comma-separated string.
    pub fn serialize<T, S>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        let s = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&s)
    }
}
