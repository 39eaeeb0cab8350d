use thiserror::Error;

/// Errors reported by the fallible parts of the crate.
///
/// Everything here is synchronous, local to the call, and non-retryable: the
/// operations are pure, so there is no external state to recover. Conditions
/// the crate deliberately does *not* intercept (fixed-point division by a
/// zero raw value, deterministic square root of a negative input) propagate
/// the behavior of the underlying integer primitive instead of appearing
/// here; callers guard those at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed text handed to `Fixed` or `Fraction` parsing.
    #[error("malformed numeric literal: {0:?}")]
    Format(String),

    /// Argument outside the domain of the named function.
    #[error("{0}: argument outside the function domain")]
    Domain(&'static str),

    /// A zero-denominator fraction used where a finite value is required.
    #[error("zero denominator in a finite-value context")]
    Arithmetic,
}
