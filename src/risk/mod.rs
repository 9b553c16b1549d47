//! Risk metrics over a historical return series.

pub mod assessment;
mod statistics;
