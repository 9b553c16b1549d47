//! # fincalc
//!
//! Closed-form and statistical financial calculations.
//!
//! A small engine of pure functions covering compound interest, annuity
//! future value, amortized loan payments, annualized investment return,
//! multi-position portfolio aggregation, and historical-return risk metrics.
//!
//! ## Architecture
//!
//! - **core** — Shared numeric helpers: currency rounding, input validation
//! - **interest** — Compound interest and future value of an annuity
//! - **lending** — Amortized loan payments
//! - **performance** — Annualized investment return
//! - **portfolio** — Position aggregation into total value and weighted return
//! - **risk** — Descriptive statistics over a return series
//! - **simulation** — Random scenario generation for testing and benchmarks
//!
//! ## Rate conventions
//!
//! Two rate conventions coexist and are **not interchangeable**. The
//! interest and lending modules take decimal fractions (`0.05` for 5%);
//! the portfolio and risk modules take percentage scalars (`8.5` for 8.5%).
//! Each function documents which one it expects.
//!
//! All functions are synchronous, stateless, and free of shared mutable
//! state; they either return a fully computed result or fail with
//! [`CalcError::InvalidInput`](error::CalcError).

pub mod core;
pub mod error;
pub mod interest;
pub mod lending;
pub mod performance;
pub mod portfolio;
pub mod risk;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::error::{CalcError, Result};
    pub use crate::interest::annuity::future_value_annuity;
    pub use crate::interest::compounding::compound_interest;
    pub use crate::lending::amortization::monthly_payment;
    pub use crate::performance::returns::investment_return;
    pub use crate::portfolio::aggregation::{portfolio_value, PortfolioSummary};
    pub use crate::portfolio::position::Position;
    pub use crate::risk::assessment::{risk_assessment, RiskSummary};
}
