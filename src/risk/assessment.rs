use crate::core::money::{ensure_finite, round_currency};
use crate::error::{CalcError, Result};
use crate::risk::statistics::{mean, sample_std_dev};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk metrics derived from a historical return series.
///
/// All three fields are percentage-point quantities derived from the
/// same series; the summary is recomputed per call and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Arithmetic mean of the series, in percent.
    pub mean_return: f64,
    /// Sample standard deviation (N−1) of the series, in percentage points.
    pub volatility: f64,
    /// `mean_return / volatility`, with no risk-free-rate offset.
    ///
    /// A zero-volatility series (constant returns) has no defined ratio;
    /// the engine reports the sentinel `0.0` for that case rather than
    /// failing, since constant returns are valid, if degenerate, data.
    pub sharpe_ratio: f64,
}

impl fmt::Display for RiskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Risk Summary")?;
        writeln!(f, "  Mean return:  {:.2}%", self.mean_return)?;
        writeln!(f, "  Volatility:   {:.2}", self.volatility)?;
        write!(f, "  Sharpe ratio: {:.2}", self.sharpe_ratio)
    }
}

/// Compute mean return, volatility, and Sharpe ratio for a return series.
///
/// Returns are percentage scalars, one per observation period; ordering
/// does not affect any of the three statistics. The Sharpe ratio here is
/// the simplified form `mean / volatility` — no risk-free rate is
/// subtracted, and none should be added by callers expecting the
/// textbook variant.
///
/// Fails with [`CalcError::InvalidInput`] for a series shorter than two
/// observations (the N−1 sample deviation is undefined for a singleton)
/// or containing non-finite values.
///
/// # Examples
///
/// ```
/// use fincalc::risk::assessment::risk_assessment;
///
/// let summary = risk_assessment(&[8.0, 12.0, 10.0, 14.0]).unwrap();
/// assert_eq!(summary.mean_return, 11.0);
/// ```
pub fn risk_assessment(returns: &[f64]) -> Result<RiskSummary> {
    if returns.len() < 2 {
        return Err(CalcError::invalid(format!(
            "returns must contain at least 2 observations, got {}",
            returns.len()
        )));
    }
    for (i, r) in returns.iter().enumerate() {
        ensure_finite(&format!("returns[{}]", i), *r)?;
    }

    let mean_return = mean(returns);
    let volatility = sample_std_dev(returns);

    let sharpe_ratio = if volatility > 0.0 {
        mean_return / volatility
    } else {
        0.0
    };

    Ok(RiskSummary {
        mean_return: round_currency(mean_return),
        volatility: round_currency(volatility),
        sharpe_ratio: round_currency(sharpe_ratio),
    })
}
