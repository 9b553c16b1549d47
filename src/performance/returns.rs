use crate::core::money::{ensure_non_negative, ensure_positive, round_currency};
use crate::error::Result;

/// Annualized investment return, as a percentage.
///
/// Computes `((final_value / initial_value)^(1 / years) - 1) * 100`: the
/// constant yearly growth rate that turns `initial_value` into
/// `final_value` over `years` years. Note the output is a percentage
/// (`8.5` means 8.5%), unlike the fractional rates the interest and
/// lending modules take.
///
/// `final_value` may be zero — a total loss is a valid scenario and
/// yields −100. Fails with
/// [`CalcError::InvalidInput`](crate::error::CalcError) when
/// `initial_value <= 0`, `final_value < 0`, `years <= 0`, or any input
/// is non-finite.
///
/// # Examples
///
/// ```
/// use fincalc::performance::returns::investment_return;
///
/// // Doubling in 10 years is about 7.18% a year.
/// let annual = investment_return(10_000.0, 20_000.0, 10.0).unwrap();
/// assert_eq!(annual, 7.18);
/// ```
pub fn investment_return(initial_value: f64, final_value: f64, years: f64) -> Result<f64> {
    ensure_positive("initial_value", initial_value)?;
    ensure_non_negative("final_value", final_value)?;
    ensure_positive("years", years)?;

    let annual = ((final_value / initial_value).powf(1.0 / years) - 1.0) * 100.0;
    Ok(round_currency(annual))
}
