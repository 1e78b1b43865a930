//! Drawdown statistics.

use ndarray::Array1;

/// Maximum drawdown of a value series.
///
/// The largest distance of a value below its running maximum, expressed in
/// the units of the series. Empty input yields 0.0.
#[must_use]
pub fn max_drawdown(values: &Array1<f64>) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for &value in values {
        peak = peak.max(value);
        worst = worst.max(peak - value);
    }
    worst
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(array![], 0.0)]
    #[case(array![100.0], 0.0)]
    #[case(array![100.0, 110.0, 120.0], 0.0)]
    #[case(array![100.0, 120.0, 90.0, 130.0, 80.0], 50.0)]
    #[case(array![50.0, 49.0, 54.0], 1.0)]
    fn max_drawdown_cases(#[case] values: Array1<f64>, #[case] expected: f64) {
        assert_relative_eq!(max_drawdown(&values), expected, epsilon = 1e-12);
    }

    #[test]
    fn drawdown_measured_from_running_peak() {
        // The trough after the second peak is shallower in absolute terms
        // than the first one, so the first drawdown wins.
        let values = array![100.0, 40.0, 90.0, 60.0];
        assert_relative_eq!(max_drawdown(&values), 60.0, epsilon = 1e-12);
    }
}
