//! Example: Fetching exchange rates from exchangeratesapi.io.
//!
//! Set `RUST_LOG=exchange_rates_client=debug` to see the resolved requests.
//!
//! Run with: cargo run --example latest_rates

use exchange_rates_client::rest::ExchangeRatesClientBuilder;
use exchange_rates_client::types::{CurrencyCode, HistoricalRates, LatestRates};
use exchange_rates_client::{RateQuery, RatesOutput};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ExchangeRatesClientBuilder::from_env().build();

    // Latest rates against EUR for two currencies
    println!("=== Latest ===");
    let latest: LatestRates = RateQuery::new()
        .with_client(client.clone())
        .rates(["USD", "IDR"])?
        .fetch_as()
        .await?;
    for (code, rate) in &latest.rates {
        println!("1 {} = {} {}", latest.base, rate, code);
    }

    let usd = CurrencyCode::parse("USD")?;
    let idr = CurrencyCode::parse("IDR")?;
    if let Some(amount) = latest.convert(Decimal::from(100), usd, idr) {
        println!("100 USD = {} IDR", amount.round_dp(2));
    }

    // A short history period
    println!("\n=== History ===");
    let history: HistoricalRates = RateQuery::new()
        .with_client(client.clone())
        .base_currency("USD")?
        .rates("JPY")?
        .period("2019-01-01", "2019-01-03")?
        .fetch_as()
        .await?;
    for date in history.dates() {
        println!("{}: {:?}", date, history.on(date));
    }

    // Raw JSON text for a single day
    println!("\n=== Text ===");
    let text = RateQuery::text()
        .with_client(client)
        .at_date("2010-01-22")?
        .fetch()
        .await?;
    if let RatesOutput::Text(json) = text {
        println!("{}", json);
    }

    // Validation happens before anything is sent
    match RateQuery::new().base_currency("rupiah") {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
