//! Basket portfolio construction and analytics.

use std::collections::BTreeMap;

use basket_primitives::{Basket, Date, PriceSeries, Symbol};
use basket_stats::{geometric_mean_return, log_returns, max_drawdown, std_pop};
use chrono::NaiveTime;
use ndarray::Array1;
use polars::prelude::*;

use crate::PortfolioError;

/// A basket portfolio over a fixed analysis window, benchmarked to an index.
///
/// All series are derived once at construction and the portfolio is
/// immutable afterwards. Daily returns are logarithmic. The weighted return
/// of a day is the sum over holdings of that day's position weight times the
/// holding's return, with weights taken from the current day's position
/// values.
#[derive(Debug, Clone)]
pub struct Portfolio {
    basket: Basket,
    start: Date,
    end: Date,
    benchmark: Symbol,
    history: BTreeMap<Symbol, PriceSeries>,
    benchmark_history: PriceSeries,
    dates: Vec<Date>,
    asset_returns: Vec<(Symbol, Array1<f64>)>,
    total_value: Array1<f64>,
    weighted_returns: Array1<f64>,
    portfolio_returns: Array1<f64>,
    benchmark_returns: Array1<f64>,
}

impl Portfolio {
    /// Minimum observations needed to form one daily return.
    const MIN_OBSERVATIONS: usize = 2;

    /// Build a portfolio from per-symbol price histories.
    ///
    /// Every held symbol must have a series in `history` aligned to the
    /// benchmark series: same trading dates in the same order. Entries in
    /// `history` for symbols outside the basket are ignored.
    ///
    /// # Arguments
    /// * `basket` - Held positions (ticker and share count)
    /// * `history` - Daily closes per held symbol
    /// * `benchmark` - Benchmark index symbol
    /// * `benchmark_history` - Daily closes of the benchmark
    /// * `start` - Analysis window start
    /// * `end` - Analysis window end
    ///
    /// # Errors
    /// Returns `PortfolioError::EmptyBasket`, `InvalidWindow`,
    /// `InsufficientHistory`, `MissingHistory`, `LengthMismatch` or
    /// `DateMismatch` when the inputs do not describe a usable portfolio.
    pub fn from_history(
        basket: Basket,
        history: BTreeMap<Symbol, PriceSeries>,
        benchmark: Symbol,
        benchmark_history: PriceSeries,
        start: Date,
        end: Date,
    ) -> Result<Self, PortfolioError> {
        if basket.is_empty() {
            return Err(PortfolioError::EmptyBasket);
        }
        if start >= end {
            return Err(PortfolioError::InvalidWindow { start, end });
        }
        let rows = benchmark_history.len();
        if rows < Self::MIN_OBSERVATIONS {
            return Err(PortfolioError::InsufficientHistory {
                required: Self::MIN_OBSERVATIONS,
                actual: rows,
            });
        }
        for symbol in basket.symbols() {
            let series = history
                .get(symbol)
                .ok_or_else(|| PortfolioError::MissingHistory(symbol.as_str().to_string()))?;
            if series.len() != rows {
                return Err(PortfolioError::LengthMismatch {
                    symbol: symbol.as_str().to_string(),
                    expected: rows,
                    actual: series.len(),
                });
            }
            if series.dates != benchmark_history.dates {
                return Err(PortfolioError::DateMismatch {
                    symbol: symbol.as_str().to_string(),
                });
            }
        }

        // Dollar value of each position and of the whole basket, per day.
        let mut position_values: Vec<(Symbol, Array1<f64>)> = Vec::with_capacity(basket.len());
        let mut total_value = Array1::zeros(rows);
        for (symbol, shares) in basket.positions() {
            let value = &history[symbol].closes * shares;
            total_value += &value;
            position_values.push((symbol.clone(), value));
        }

        let portfolio_returns = log_returns(&total_value)?;
        let benchmark_returns = log_returns(&benchmark_history.closes)?;

        // Per-asset returns and the value-weighted daily return, with each
        // day's weights taken from that day's position values.
        let mut asset_returns: Vec<(Symbol, Array1<f64>)> = Vec::with_capacity(basket.len());
        let mut weighted_returns = Array1::zeros(rows - 1);
        for (symbol, value) in &position_values {
            let returns = log_returns(value)?;
            for t in 0..rows - 1 {
                let weight = value[t + 1] / total_value[t + 1];
                weighted_returns[t] += weight * returns[t];
            }
            asset_returns.push((symbol.clone(), returns));
        }

        Ok(Self {
            basket,
            start,
            end,
            benchmark,
            dates: benchmark_history.dates.clone(),
            history,
            benchmark_history,
            asset_returns,
            total_value,
            weighted_returns,
            portfolio_returns,
            benchmark_returns,
        })
    }

    /// Geometric average daily return over the analysis window.
    ///
    /// Compounds the portfolio's daily returns and takes the calendar-day
    /// root: `(prod(1 + r))^(1 / days) - 1` with `days = end - start`.
    ///
    /// # Errors
    /// Returns `PortfolioError::Stats` if the window spans no calendar days.
    pub fn average_daily_return(&self) -> Result<f64, PortfolioError> {
        let days = (self.end - self.start).num_days() as f64;
        Ok(geometric_mean_return(&self.portfolio_returns, days)?)
    }

    /// Portfolio volatility.
    ///
    /// Population standard deviation of the value-weighted daily returns.
    ///
    /// # Errors
    /// Returns `PortfolioError::Stats` on an empty return series.
    pub fn volatility(&self) -> Result<f64, PortfolioError> {
        Ok(std_pop(&self.weighted_returns)?)
    }

    /// Ratio of portfolio volatility to benchmark volatility.
    ///
    /// # Errors
    /// Returns `PortfolioError::Stats` on an empty return series.
    pub fn risk_ratio(&self) -> Result<f64, PortfolioError> {
        let benchmark_vol = std_pop(&self.benchmark_returns)?;
        Ok(self.volatility()? / benchmark_vol)
    }

    /// Volatility change from holding `shares` more of a held `symbol`.
    ///
    /// Reprices the basket with the enlarged position and reports the new
    /// volatility minus the current one.
    ///
    /// # Errors
    /// Returns `PortfolioError::UnknownSymbol` if `symbol` is not held; use
    /// [`Portfolio::marginal_volatility_with`] to probe a new ticker.
    pub fn marginal_volatility(
        &self,
        symbol: &Symbol,
        shares: f64,
    ) -> Result<f64, PortfolioError> {
        if !self.basket.contains(symbol) {
            return Err(PortfolioError::UnknownSymbol(symbol.as_str().to_string()));
        }
        let enlarged = self.with_added_shares(symbol.clone(), shares, None)?;
        Ok(enlarged.volatility()? - self.volatility()?)
    }

    /// Volatility change from adding `shares` of a ticker not yet held,
    /// priced by `series`.
    ///
    /// # Errors
    /// Returns `PortfolioError::LengthMismatch` or `DateMismatch` if
    /// `series` is not aligned with the portfolio's trading dates.
    pub fn marginal_volatility_with(
        &self,
        symbol: Symbol,
        shares: f64,
        series: PriceSeries,
    ) -> Result<f64, PortfolioError> {
        let enlarged = self.with_added_shares(symbol, shares, Some(series))?;
        Ok(enlarged.volatility()? - self.volatility()?)
    }

    fn with_added_shares(
        &self,
        symbol: Symbol,
        shares: f64,
        series: Option<PriceSeries>,
    ) -> Result<Self, PortfolioError> {
        let mut history = self.history.clone();
        if let Some(series) = series {
            history.insert(symbol.clone(), series);
        }
        Self::from_history(
            self.basket.with_added(symbol, shares),
            history,
            self.benchmark.clone(),
            self.benchmark_history.clone(),
            self.start,
            self.end,
        )
    }

    /// Maximum drawdown of total portfolio value, in value units.
    #[must_use]
    pub fn max_drawdown(&self) -> f64 {
        max_drawdown(&self.total_value)
    }

    /// Tabular view of the daily return series.
    ///
    /// Columns: `date`, one `{symbol}_return` column per holding,
    /// `weighted_return`, `portfolio_return` and `benchmark_return`. The
    /// table has one row per return observation, so it skips the first
    /// trading day of the window.
    ///
    /// # Errors
    /// Returns `PortfolioError::Polars` if column assembly fails.
    pub fn returns_frame(&self) -> Result<DataFrame, PortfolioError> {
        let dates_ms: Vec<i64> = self.dates[1..]
            .iter()
            .map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
            .collect();
        let dates_series = Series::new("timestamp".into(), &dates_ms);
        let dates_datetime =
            dates_series.cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
        let dates_col = dates_datetime.cast(&DataType::Date)?;

        let mut columns: Vec<Column> = Vec::with_capacity(self.asset_returns.len() + 4);
        columns.push(dates_col.with_name("date".into()).into());
        for (symbol, returns) in &self.asset_returns {
            columns.push(Column::new(format!("{symbol}_return").into(), returns.to_vec()));
        }
        columns.push(Column::new("weighted_return".into(), self.weighted_returns.to_vec()));
        columns.push(Column::new("portfolio_return".into(), self.portfolio_returns.to_vec()));
        columns.push(Column::new("benchmark_return".into(), self.benchmark_returns.to_vec()));

        Ok(DataFrame::new(columns)?)
    }

    /// The held positions.
    #[must_use]
    pub const fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Analysis window start.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Analysis window end.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Benchmark index symbol.
    #[must_use]
    pub const fn benchmark(&self) -> &Symbol {
        &self.benchmark
    }

    /// Trading dates backing the series.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Total basket value per trading day.
    #[must_use]
    pub const fn total_value(&self) -> &Array1<f64> {
        &self.total_value
    }

    /// Value-weighted daily returns.
    #[must_use]
    pub const fn weighted_returns(&self) -> &Array1<f64> {
        &self.weighted_returns
    }

    /// Daily log returns of total basket value.
    #[must_use]
    pub const fn portfolio_returns(&self) -> &Array1<f64> {
        &self.portfolio_returns
    }

    /// Daily log returns of the benchmark.
    #[must_use]
    pub const fn benchmark_returns(&self) -> &Array1<f64> {
        &self.benchmark_returns
    }

    /// Daily log returns for a held symbol.
    #[must_use]
    pub fn asset_returns(&self, symbol: &Symbol) -> Option<&Array1<f64>> {
        self.asset_returns.iter().find(|(s, _)| s == symbol).map(|(_, r)| r)
    }
}
