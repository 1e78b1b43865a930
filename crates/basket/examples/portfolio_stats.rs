//! Example: Portfolio Analytics on Real Market Data
//!
//! This example demonstrates how to:
//! 1. Fetch daily closes from Yahoo Finance
//! 2. Build a basket portfolio aligned to a benchmark index
//! 3. Compute return, volatility, risk ratio and drawdown analytics

use std::collections::BTreeMap;

use basket::{
    portfolio::Portfolio,
    primitives::{Basket, Date, PriceSeries, Symbol},
};
use chrono::DateTime;
use ndarray::Array1;
use time::{Duration, OffsetDateTime};
use yahoo_finance_api as yahoo;

/// Holdings for the example basket.
const HOLDINGS: &[(&str, f64)] = &[("AAPL", 10.0), ("MSFT", 5.0), ("JNJ", 8.0)];

/// Benchmark index.
const BENCHMARK: &str = "^GSPC";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basket Portfolio Analytics with Yahoo Finance Data ===\n");

    // =========================================================================
    // FETCH DATA FROM YAHOO FINANCE
    // =========================================================================

    let provider = yahoo::YahooConnector::new()?;

    let end = OffsetDateTime::now_utc();
    let start = end - Duration::days(504); // ~2 years of trading days

    println!("Fetching data from {} to {}\n", start.date(), end.date());

    let mut per_symbol: BTreeMap<String, BTreeMap<Date, f64>> = BTreeMap::new();
    for (ticker, _) in HOLDINGS {
        let closes = fetch_closes(&provider, ticker, start, end).await?;
        println!("  {} - {} closes fetched", ticker, closes.len());
        per_symbol.insert((*ticker).to_string(), closes);
    }
    let index_closes = fetch_closes(&provider, BENCHMARK, start, end).await?;
    println!("  {} - {} closes fetched", BENCHMARK, index_closes.len());

    // =========================================================================
    // ALIGN TRADING DATES AND BUILD THE PORTFOLIO
    // =========================================================================

    let mut dates: Vec<Date> = index_closes.keys().copied().collect();
    dates.retain(|d| per_symbol.values().all(|closes| closes.contains_key(d)));
    println!("\n{} aligned trading dates", dates.len());

    let window_start = *dates.first().ok_or("no overlapping trading dates")?;
    let window_end = *dates.last().ok_or("no overlapping trading dates")?;

    let mut basket = Basket::new();
    let mut history: BTreeMap<Symbol, PriceSeries> = BTreeMap::new();
    for (ticker, shares) in HOLDINGS {
        basket.add(Symbol::from(*ticker), *shares);
        history.insert(Symbol::from(*ticker), series_on(&dates, &per_symbol[*ticker]));
    }

    let portfolio = Portfolio::from_history(
        basket,
        history,
        Symbol::from(BENCHMARK),
        series_on(&dates, &index_closes),
        window_start,
        window_end,
    )?;

    // =========================================================================
    // ANALYTICS
    // =========================================================================

    println!("\n=== Portfolio Statistics ===\n");
    println!("{:<24} {:>12.6}", "Avg daily return", portfolio.average_daily_return()?);
    println!("{:<24} {:>12.6}", "Volatility", portfolio.volatility()?);
    println!("{:<24} {:>12.4}", "Risk ratio", portfolio.risk_ratio()?);
    println!("{:<24} {:>12.2}", "Max drawdown ($)", portfolio.max_drawdown());

    // Marginal volatility of topping up each existing position by 5 shares.
    println!("\n=== Marginal Volatility (+5 shares) ===\n");
    for (ticker, _) in HOLDINGS {
        let marginal = portfolio.marginal_volatility(&Symbol::from(*ticker), 5.0)?;
        println!("{:<24} {:>12.8}", *ticker, marginal);
    }

    println!("\n=== Daily Returns (head) ===\n");
    println!("{}", portfolio.returns_frame()?.head(Some(10)));

    Ok(())
}

/// Fetch daily closes for `symbol`, keyed by trading date.
async fn fetch_closes(
    provider: &yahoo::YahooConnector,
    symbol: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<BTreeMap<Date, f64>, Box<dyn std::error::Error>> {
    let response = provider.get_quote_history(symbol, start, end).await?;
    let quotes = response.quotes()?;

    let mut closes = BTreeMap::new();
    for quote in &quotes {
        if let Some(datetime) = DateTime::from_timestamp(quote.timestamp, 0) {
            closes.insert(datetime.date_naive(), quote.close);
        }
    }
    Ok(closes)
}

/// Assemble a series over `dates` from a date-keyed close map.
fn series_on(dates: &[Date], closes: &BTreeMap<Date, f64>) -> PriceSeries {
    let values: Vec<f64> = dates.iter().map(|d| closes[d]).collect();
    PriceSeries::new(dates.to_vec(), Array1::from_vec(values))
}
