//! Portfolio analytics CLI tool.
//!
//! Fetches daily closes from Yahoo Finance for a basket of holdings and a
//! benchmark index, aligns their trading dates, and prints the portfolio's
//! return and risk statistics.
//!
//! Usage: `analyze TICKER=SHARES [TICKER=SHARES ...] [--index SYMBOL] [--years N] [--probe TICKER=SHARES]`
//! Example: `analyze AAPL=10 MSFT=5 --index ^GSPC --years 2`

use std::{collections::BTreeMap, env};

use basket::{
    portfolio::Portfolio,
    primitives::{Basket, Date, PriceSeries, Symbol},
};
use chrono::DateTime;
use ndarray::Array1;
use time::{Duration, OffsetDateTime};
use yahoo_finance_api as yahoo;

/// Default benchmark index.
const DEFAULT_INDEX: &str = "^GSPC";

/// Default analysis period in years.
const DEFAULT_YEARS: i64 = 1;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let holdings = parse_holdings(&args[1..]);
    if holdings.is_empty() {
        eprintln!(
            "Usage: analyze TICKER=SHARES [TICKER=SHARES ...] [--index SYMBOL] [--years N] [--probe TICKER=SHARES]"
        );
        eprintln!("Example: analyze AAPL=10 MSFT=5 --index ^GSPC --years 2");
        std::process::exit(1);
    }

    let index = parse_flag(&args, "--index").unwrap_or_else(|| DEFAULT_INDEX.to_string());
    let years = parse_years(&args);
    let probe = parse_flag(&args, "--probe").and_then(|spec| parse_holding(&spec));

    let provider = yahoo::YahooConnector::new()?;
    let end = OffsetDateTime::now_utc();
    let start = end - Duration::days(years * 365);

    print!("Fetching data for {} holdings plus {}", holdings.len(), index);

    let mut per_symbol: BTreeMap<String, BTreeMap<Date, f64>> = BTreeMap::new();
    for (ticker, _) in &holdings {
        let closes = fetch_closes(&provider, ticker, start, end).await?;
        if closes.is_empty() {
            eprintln!("\nNo quotes available for {ticker}");
            std::process::exit(1);
        }
        per_symbol.insert(ticker.clone(), closes);
        print!(".");
    }
    if let Some((ticker, _)) = &probe {
        if !per_symbol.contains_key(ticker) {
            let closes = fetch_closes(&provider, ticker, start, end).await?;
            if closes.is_empty() {
                eprintln!("\nNo quotes available for probe ticker {ticker}");
                std::process::exit(1);
            }
            per_symbol.insert(ticker.clone(), closes);
            print!(".");
        }
    }
    let index_closes = fetch_closes(&provider, &index, start, end).await?;
    println!(" done");

    // Keep only the trading dates every series has a close for.
    let mut dates: Vec<Date> = index_closes.keys().copied().collect();
    dates.retain(|d| per_symbol.values().all(|closes| closes.contains_key(d)));

    let window_start = *dates.first().ok_or("no overlapping trading dates")?;
    let window_end = *dates.last().ok_or("no overlapping trading dates")?;

    let mut basket = Basket::new();
    let mut history: BTreeMap<Symbol, PriceSeries> = BTreeMap::new();
    for (ticker, shares) in &holdings {
        basket.add(Symbol::from(ticker.as_str()), *shares);
        history.insert(Symbol::from(ticker.as_str()), series_on(&dates, &per_symbol[ticker]));
    }
    let probe_series = probe.as_ref().map(|(ticker, _)| series_on(&dates, &per_symbol[ticker]));
    let benchmark_series = series_on(&dates, &index_closes);

    let portfolio = Portfolio::from_history(
        basket,
        history,
        Symbol::from(index.as_str()),
        benchmark_series,
        window_start,
        window_end,
    )?;

    println!(
        "\nBasket of {} holdings vs {} over {} trading days ({} to {})\n",
        holdings.len(),
        index,
        portfolio.dates().len(),
        window_start,
        window_end,
    );
    println!("{:<24} {:>12.6}", "Avg daily return", portfolio.average_daily_return()?);
    println!("{:<24} {:>12.6}", "Volatility", portfolio.volatility()?);
    println!("{:<24} {:>12.4}", "Risk ratio", portfolio.risk_ratio()?);
    println!("{:<24} {:>12.2}", "Max drawdown ($)", portfolio.max_drawdown());

    if let Some((ticker, shares)) = probe {
        let symbol = Symbol::from(ticker.as_str());
        let marginal = if portfolio.basket().contains(&symbol) {
            portfolio.marginal_volatility(&symbol, shares)?
        } else {
            let series = probe_series.ok_or("probe series missing")?;
            portfolio.marginal_volatility_with(symbol, shares, series)?
        };
        println!("{:<24} {:>12.6}", format!("Marginal vol {ticker}+{shares}"), marginal);
    }

    println!("\nDaily returns (head):\n{}", portfolio.returns_frame()?.head(Some(10)));

    Ok(())
}

fn parse_holdings(args: &[String]) -> Vec<(String, f64)> {
    let mut holdings = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i].starts_with("--") {
            // Every flag takes a value.
            i += 2;
            continue;
        }
        if let Some(holding) = parse_holding(&args[i]) {
            holdings.push(holding);
        } else {
            eprintln!("Skipping malformed holding {:?} (expected TICKER=SHARES)", args[i]);
        }
        i += 1;
    }
    holdings
}

fn parse_holding(spec: &str) -> Option<(String, f64)> {
    let (ticker, shares) = spec.split_once('=')?;
    let shares: f64 = shares.parse().ok()?;
    if ticker.is_empty() || shares <= 0.0 {
        return None;
    }
    Some((ticker.to_uppercase(), shares))
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1).cloned())
}

fn parse_years(args: &[String]) -> i64 {
    for i in 0..args.len() {
        if args[i] == "--years" && i + 1 < args.len() {
            if let Ok(y) = args[i + 1].parse::<i64>() {
                return y;
            }
        }
    }
    DEFAULT_YEARS
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
