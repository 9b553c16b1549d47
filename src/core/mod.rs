//! Shared numeric helpers used by every calculation module.

pub mod money;
