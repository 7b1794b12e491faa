//! exchangeratesapi.io endpoint constants.

/// Base URL for the exchange-rate service.
pub const EXCHANGE_RATES_BASE_URL: &str = "https://api.exchangeratesapi.io";

/// Environment variable that overrides [`EXCHANGE_RATES_BASE_URL`].
pub const BASE_URL_ENV: &str = "EXCHANGE_RATES_BASE_URL";

/// Path segment for the most recent rates.
pub const LATEST: &str = "latest";

/// Path segment for rates over a period.
pub const HISTORY: &str = "history";
