//! Dispersion statistics.

use ndarray::Array1;

use crate::StatsError;

/// Arithmetic mean.
///
/// # Errors
/// Returns `StatsError::EmptyData` on empty input.
pub fn mean(data: &Array1<f64>) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyData);
    }
    Ok(data.sum() / data.len() as f64)
}

/// Population standard deviation (no degrees-of-freedom correction).
///
/// # Errors
/// Returns `StatsError::EmptyData` on empty input.
pub fn std_pop(data: &Array1<f64>) -> Result<f64, StatsError> {
    let mu = mean(data)?;
    let variance = data.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / data.len() as f64;
    Ok(variance.sqrt())
}
