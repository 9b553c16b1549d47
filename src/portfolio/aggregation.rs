use crate::core::money::{ensure_finite, ensure_non_negative, round_currency};
use crate::error::{CalcError, Result};
use crate::portfolio::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate view of a portfolio: total value and value-weighted return.
///
/// Derived and immutable — recomputed on demand by
/// [`portfolio_value`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of all position amounts.
    pub total_value: f64,
    /// Value-weighted average return, in percent.
    pub weighted_avg_return: f64,
}

impl fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Portfolio Summary")?;
        writeln!(f, "  Total value:       {:.2}", self.total_value)?;
        write!(f, "  Weighted return:   {:.2}%", self.weighted_avg_return)
    }
}

/// Aggregate positions into total value and weighted average return.
///
/// `total_value` is the plain sum of amounts. `weighted_avg_return` is
/// `Σ(amount_i * return_rate_i) / total_value` — each position pulls the
/// average in proportion to its size, so this is not a simple mean.
/// Return rates are percentage scalars and may be negative.
///
/// Fails with [`CalcError::InvalidInput`] when the slice is empty, any
/// amount is negative or non-finite, or the total value is zero (all
/// amounts zero leaves the weighted average undefined; that is rejected
/// rather than divided through).
///
/// # Examples
///
/// ```
/// use fincalc::portfolio::aggregation::portfolio_value;
/// use fincalc::portfolio::position::Position;
///
/// let summary = portfolio_value(&[
///     Position::new(1_000.0, 10.0),
///     Position::new(1_000.0, 20.0),
/// ]).unwrap();
/// assert_eq!(summary.total_value, 2_000.0);
/// assert_eq!(summary.weighted_avg_return, 15.0);
/// ```
pub fn portfolio_value(positions: &[Position]) -> Result<PortfolioSummary> {
    if positions.is_empty() {
        return Err(CalcError::invalid("positions must be a non-empty sequence"));
    }

    let mut total_value = 0.0;
    let mut weighted_return = 0.0;

    for (i, position) in positions.iter().enumerate() {
        ensure_non_negative(&format!("positions[{}].amount", i), position.amount)?;
        ensure_finite(&format!("positions[{}].return_rate", i), position.return_rate)?;

        total_value += position.amount;
        weighted_return += position.amount * position.return_rate;
    }

    if total_value == 0.0 {
        return Err(CalcError::invalid(
            "portfolio total value is zero, weighted average return is undefined",
        ));
    }

    Ok(PortfolioSummary {
        total_value: round_currency(total_value),
        weighted_avg_return: round_currency(weighted_return / total_value),
    })
}
