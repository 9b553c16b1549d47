use thiserror::Error;

/// Errors produced by the calculation engine.
///
/// Every failure is a deterministic validation error caused by
/// caller-supplied data; there are no transient conditions and nothing
/// to retry. A function either returns a fully computed result or one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A precondition on the inputs was violated: a negative amount where
    /// one is disallowed, a non-positive period count, a non-finite value,
    /// an empty or too-short series, or a portfolio whose positions sum
    /// to zero value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Shorthand used at validation sites throughout the engine.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CalcError::InvalidInput(reason.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CalcError>;
