use crate::core::money::{ensure_non_negative, ensure_positive, round_currency};
use crate::error::{CalcError, Result};

/// Final amount after compound interest.
///
/// Computes `principal * (1 + annual_rate / compounds_per_year) ^
/// (compounds_per_year * years)` and rounds the result to currency
/// precision. The rate is a decimal fraction (`0.05` for 5%), not a
/// percentage.
///
/// Fails with [`CalcError::InvalidInput`] when `principal < 0`,
/// `annual_rate < 0`, `years <= 0`, `compounds_per_year == 0`, or any
/// input is non-finite.
///
/// # Examples
///
/// ```
/// use fincalc::interest::compounding::compound_interest;
///
/// // $10,000 at 5% compounded quarterly for 10 years.
/// let amount = compound_interest(10_000.0, 0.05, 10.0, 4).unwrap();
/// assert_eq!(amount, 16_436.19);
/// ```
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounds_per_year: u32,
) -> Result<f64> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate", annual_rate)?;
    ensure_positive("years", years)?;
    if compounds_per_year == 0 {
        return Err(CalcError::invalid(
            "compounds_per_year must be at least 1, got 0",
        ));
    }

    let n = f64::from(compounds_per_year);
    let amount = principal * (1.0 + annual_rate / n).powf(n * years);
    Ok(round_currency(amount))
}
