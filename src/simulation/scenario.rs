//! Scenario generation utilities.
//!
//! Generates random portfolios and return series to exercise the
//! aggregation and risk functions under varied conditions. The engine
//! itself is deterministic; randomness lives only here.

use crate::portfolio::position::Position;
use rand::Rng;

/// Configuration for generating a random portfolio.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Number of positions in the portfolio.
    pub position_count: usize,
    /// Minimum position amount.
    pub min_amount: f64,
    /// Maximum position amount.
    pub max_amount: f64,
    /// Lowest possible per-position return, in percent.
    pub min_return: f64,
    /// Highest possible per-position return, in percent.
    pub max_return: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            position_count: 10,
            min_amount: 1_000.0,
            max_amount: 1_000_000.0,
            min_return: -20.0,
            max_return: 30.0,
        }
    }
}

/// Generate a random portfolio.
///
/// Amounts are quantized to cents so generated data already sits at
/// currency precision, and the minimum amount is kept positive so the
/// result always satisfies `portfolio_value`'s preconditions.
pub fn generate_portfolio(config: &ScenarioConfig) -> Vec<Position> {
    let mut rng = rand::thread_rng();
    let min_amount = config.min_amount.max(0.01);

    (0..config.position_count.max(1))
        .map(|_| {
            let cents = rng.gen_range((min_amount * 100.0) as u64..=(config.max_amount * 100.0) as u64);
            let rate = rng.gen_range(config.min_return..=config.max_return);
            Position::new(cents as f64 / 100.0, (rate * 100.0).round() / 100.0)
        })
        .collect()
}

/// Generate a random return series of at least two observations.
pub fn generate_return_series(len: usize, min_return: f64, max_return: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len.max(2))
        .map(|_| {
            let r = rng.gen_range(min_return..=max_return);
            (r * 100.0).round() / 100.0
        })
        .collect()
}
