//! Loan amortization calculations.

pub mod amortization;
