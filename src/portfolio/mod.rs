//! Portfolio aggregation: positions, total value, weighted return.

pub mod aggregation;
pub mod position;
