//! Return series computations.

use ndarray::Array1;

use crate::StatsError;

/// Compute daily logarithmic returns from a price series.
///
/// Element `t` of the result is `ln(p[t + 1] / p[t])`, so the output is one
/// element shorter than the input.
///
/// # Arguments
/// * `prices` - Closing prices, oldest first
///
/// # Returns
/// Log returns, one per consecutive price pair.
///
/// # Errors
/// Returns `StatsError::InsufficientData` if fewer than 2 prices are given.
pub fn log_returns(prices: &Array1<f64>) -> Result<Array1<f64>, StatsError> {
    if prices.len() < 2 {
        return Err(StatsError::InsufficientData { required: 2, actual: prices.len() });
    }
    Ok(Array1::from_iter(prices.windows(2).into_iter().map(|w| (w[1] / w[0]).ln())))
}

/// Geometric mean return over `periods` periods.
///
/// Compounds `(1 + r)` across the return series and takes the `periods`-th
/// root: `(prod(1 + r))^(1 / periods) - 1`. `periods` need not equal the
/// observation count; portfolio analytics pass calendar days here.
///
/// # Errors
/// Returns `StatsError::InvalidPeriods` if `periods <= 0`.
pub fn geometric_mean_return(returns: &Array1<f64>, periods: f64) -> Result<f64, StatsError> {
    if periods <= 0.0 {
        return Err(StatsError::InvalidPeriods(periods));
    }
    let compounded: f64 = returns.iter().map(|r| 1.0 + r).product();
    Ok(compounded.powf(1.0 / periods) - 1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn log_returns_basic() {
        let prices = array![100.0, 110.0, 121.0];
        let returns = log_returns(&prices).unwrap();

        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], 1.1_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(returns[1], 1.1_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn log_returns_flat_series_is_zero() {
        let prices = array![42.0, 42.0, 42.0, 42.0];
        let returns = log_returns(&prices).unwrap();
        assert!(returns.iter().all(|r| r.abs() < 1e-15));
    }

    #[rstest]
    #[case(array![])]
    #[case(array![100.0])]
    fn log_returns_needs_two_prices(#[case] prices: Array1<f64>) {
        assert!(matches!(
            log_returns(&prices),
            Err(StatsError::InsufficientData { required: 2, .. })
        ));
    }

    #[test]
    fn geometric_mean_of_constant_returns() {
        let returns = array![0.1, 0.1];
        let gm = geometric_mean_return(&returns, 2.0).unwrap();
        assert_relative_eq!(gm, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn geometric_mean_calendar_scaling() {
        // Two 10% periods spread over four calendar periods.
        let returns = array![0.1, 0.1];
        let gm = geometric_mean_return(&returns, 4.0).unwrap();
        assert_relative_eq!(gm, 1.21_f64.powf(0.25) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn geometric_mean_empty_returns_is_zero() {
        let returns: Array1<f64> = array![];
        assert_relative_eq!(
            geometric_mean_return(&returns, 5.0).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn geometric_mean_rejects_bad_periods(#[case] periods: f64) {
        let returns = array![0.1];
        assert!(matches!(
            geometric_mean_return(&returns, periods),
            Err(StatsError::InvalidPeriods(_))
        ));
    }
}
