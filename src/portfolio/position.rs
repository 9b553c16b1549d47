use serde::{Deserialize, Serialize};

/// One holding in a portfolio: a monetary amount and its return rate.
///
/// The return rate is a percentage scalar (`8.5` for 8.5%), not a
/// decimal fraction, and may be negative for a losing position.
/// Positions have no lifecycle of their own — the caller constructs
/// them and [`portfolio_value`](crate::portfolio::aggregation::portfolio_value)
/// consumes them per aggregation call.
///
/// # Examples
///
/// ```
/// use fincalc::portfolio::position::Position;
///
/// let holding = Position::new(10_000.0, 8.5);
/// assert_eq!(holding.amount, 10_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Monetary value of the holding. Must be non-negative.
    pub amount: f64,
    /// Annual return of the holding, in percent.
    pub return_rate: f64,
}

impl Position {
    pub fn new(amount: f64, return_rate: f64) -> Self {
        Self {
            amount,
            return_rate,
        }
    }
}
