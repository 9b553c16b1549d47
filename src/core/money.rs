//! Currency rounding and numeric input validation.
//!
//! The engine computes in full `f64` precision and rounds to currency
//! precision (2 decimal places) exactly once, at each public function's
//! boundary. Intermediate values are never rounded, so rounding error
//! cannot compound through a formula.

use crate::error::{CalcError, Result};

/// Round a value to currency precision (2 decimal places).
///
/// Applied only at function boundaries, never on intermediates.
///
/// # Examples
///
/// ```
/// use fincalc::core::money::round_currency;
///
/// assert_eq!(round_currency(16436.194566), 16436.19);
/// assert_eq!(round_currency(954.8305909), 954.83);
/// ```
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject NaN and infinite inputs.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Finite and `>= 0`.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Finite and `> 0`.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}
