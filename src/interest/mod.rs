//! Compound growth calculations.

pub mod annuity;
pub mod compounding;
