use crate::core::money::{ensure_non_negative, ensure_positive, round_currency};
use crate::error::Result;

/// Future value of an ordinary annuity: a stream of equal payments, one
/// per period, each earning `rate` per period thereafter.
///
/// Computes `payment * (((1 + rate)^periods - 1) / rate)`. The rate is a
/// per-period decimal fraction. At `rate == 0` the stream earns nothing
/// and the value degrades to the simple sum `payment * periods`; that
/// branch is explicit rather than a division by near-zero.
///
/// Fails with [`CalcError::InvalidInput`](crate::error::CalcError) when
/// `payment < 0`, `rate < 0`, `periods <= 0`, or any input is non-finite.
///
/// # Examples
///
/// ```
/// use fincalc::interest::annuity::future_value_annuity;
///
/// // $1,000 a year for 10 years at 6%.
/// let fv = future_value_annuity(1_000.0, 0.06, 10.0).unwrap();
/// assert_eq!(fv, 13_180.79);
/// ```
pub fn future_value_annuity(payment: f64, rate: f64, periods: f64) -> Result<f64> {
    ensure_non_negative("payment", payment)?;
    ensure_non_negative("rate", rate)?;
    ensure_positive("periods", periods)?;

    if rate == 0.0 {
        return Ok(round_currency(payment * periods));
    }

    let fv = payment * (((1.0 + rate).powf(periods) - 1.0) / rate);
    Ok(round_currency(fv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_annuity() {
        // 1000 * ((1.06^10 - 1) / 0.06) = 13180.79
        let fv = future_value_annuity(1_000.0, 0.06, 10.0).unwrap();
        assert_relative_eq!(fv, 13_180.79, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_degrades_to_sum() {
        let fv = future_value_annuity(500.0, 0.0, 12.0).unwrap();
        assert_eq!(fv, 6_000.0);
    }

    #[test]
    fn test_single_period() {
        // One payment, no time to earn interest under the ordinary convention.
        let fv = future_value_annuity(1_000.0, 0.05, 1.0).unwrap();
        assert_eq!(fv, 1_000.0);
    }

    #[test]
    fn test_zero_payment() {
        let fv = future_value_annuity(0.0, 0.05, 10.0).unwrap();
        assert_eq!(fv, 0.0);
    }

    #[test]
    fn test_negative_payment_rejected() {
        assert!(future_value_annuity(-1.0, 0.05, 10.0).is_err());
    }

    #[test]
    fn test_zero_periods_rejected() {
        assert!(future_value_annuity(1_000.0, 0.05, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(future_value_annuity(f64::NAN, 0.05, 10.0).is_err());
    }
}
