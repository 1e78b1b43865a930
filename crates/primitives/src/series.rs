//! Daily closing price series.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Daily closing prices for a single instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Trading dates, ascending.
    pub dates: Vec<Date>,
    /// Closing price per date.
    #[serde(skip)]
    pub closes: Array1<f64>,
}

impl PriceSeries {
    /// Create a new price series.
    #[must_use]
    pub fn new(dates: Vec<Date>, closes: Array1<f64>) -> Self {
        debug_assert_eq!(dates.len(), closes.len());
        Self { dates, closes }
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Closing price on `date`, if present.
    #[must_use]
    pub fn close_on(&self, date: Date) -> Option<f64> {
        self.dates.iter().position(|d| *d == date).map(|i| self.closes[i])
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn date(day: u32) -> Date {
        Date::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn close_on_date() {
        let series = PriceSeries::new(vec![date(2), date(3)], array![187.0, 189.5]);

        assert_eq!(series.close_on(date(2)), Some(187.0));
        assert_eq!(series.close_on(date(3)), Some(189.5));
        assert_eq!(series.close_on(date(4)), None);
    }

    #[test]
    fn series_len() {
        let series = PriceSeries::new(vec![date(2), date(3), date(4)], array![1.0, 2.0, 3.0]);
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
    }
}
