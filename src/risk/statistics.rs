//! Descriptive statistics used by the risk assessment.
//!
//! These operate on already-validated, non-empty slices; the public
//! entry point in [`assessment`](crate::risk::assessment) owns the
//! precondition checks.

/// Arithmetic mean.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N−1 denominator).
///
/// Caller guarantees `values.len() >= 2`.
pub(crate) fn sample_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_relative_eq!(mean(&[-10.0, 10.0]), 0.0);
    }

    #[test]
    fn test_sample_std_dev() {
        // Known series: mean 5, squared deviations 4+1+1+4, / 3 -> sqrt(10/3)
        let s = sample_std_dev(&[3.0, 4.0, 6.0, 7.0]);
        assert_relative_eq!(s, (10.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_has_zero_deviation() {
        assert_eq!(sample_std_dev(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }
}
