//! Investment performance measurement.

pub mod returns;
