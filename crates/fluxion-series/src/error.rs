//! Error types for series operations.

use thiserror::Error;

/// Errors raised by series operations whose preconditions fail.
///
/// Every operation is a pure function over immutable values, so these
/// errors are permanent: retrying the same call yields the same error.
/// Callers that want graceful degradation should check the relevant
/// leading coefficients before invoking the operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// `pow` supports non-negative exponents only.
    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    /// Composition needs an inner series with zero constant term;
    /// otherwise every output coefficient would depend on infinitely
    /// many terms of the outer series.
    #[error("composition requires an inner series with zero constant term")]
    CompositionConstantTerm,

    /// Reversion needs a series with zero constant term, for the same
    /// reason as composition.
    #[error("reversion requires a series with zero constant term")]
    ReversionConstantTerm,

    /// The numerator reached a nonzero coefficient while the denominator
    /// was still zero: the quotient would need negative powers of `x`
    /// and is not a power series.
    #[error("quotient is not a power series: numerator valuation is below denominator valuation")]
    UnequalValuation,

    /// The leading-coefficient analysis found no branch along which a
    /// square root can be computed in the coefficient field.
    #[error("series has no computable square root in its coefficient field")]
    NoSquareRoot,
}
