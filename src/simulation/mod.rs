//! Random scenario generation for tests and benchmarks.

pub mod scenario;
