use crate::core::money::{ensure_non_negative, ensure_positive, round_currency};
use crate::error::Result;

/// Fixed monthly payment that fully amortizes a loan.
///
/// The annual rate (a decimal fraction, `0.04` for 4%) is converted to a
/// monthly rate `r = annual_rate / 12` over `n = years * 12` payments,
/// then `principal * r * (1 + r)^n / ((1 + r)^n - 1)`. An interest-free
/// loan (`annual_rate == 0`) is the explicit edge case
/// `principal / n` — straight division of the principal across payments.
///
/// Fails with [`CalcError::InvalidInput`](crate::error::CalcError) when
/// `principal <= 0`, `annual_rate < 0`, `years <= 0`, or any input is
/// non-finite.
///
/// # Examples
///
/// ```
/// use fincalc::lending::amortization::monthly_payment;
///
/// // 30-year $200,000 mortgage at 4%.
/// let payment = monthly_payment(200_000.0, 0.04, 30.0).unwrap();
/// assert_eq!(payment, 954.83);
/// ```
pub fn monthly_payment(principal: f64, annual_rate: f64, years: f64) -> Result<f64> {
    ensure_positive("principal", principal)?;
    ensure_non_negative("annual_rate", annual_rate)?;
    ensure_positive("years", years)?;

    let num_payments = years * 12.0;

    if annual_rate == 0.0 {
        return Ok(round_currency(principal / num_payments));
    }

    let monthly_rate = annual_rate / 12.0;
    let growth = (1.0 + monthly_rate).powf(num_payments);
    let payment = principal * (monthly_rate * growth) / (growth - 1.0);
    Ok(round_currency(payment))
}
