//! Types shared by the query builder and the client.

pub mod currency;
pub mod date;
pub mod responses;
pub mod serde_helpers;

pub use currency::{CurrencyCode, SUPPORTED_CURRENCIES, Symbols};
pub use date::IsoDate;
pub use responses::{HistoricalRates, LatestRates};
