//! # fluxion-series
//!
//! Lazily evaluated formal power series with exact coefficients.
//!
//! A series is an infinite sequence of coefficients read as
//! a₀ + a₁·x + a₂·x² + …, treated as an algebraic object independent of
//! convergence. This crate provides:
//!
//! - [`SeriesArena`]: arena storage for series nodes, with every
//!   coefficient computed on demand and memoized
//! - [`Series`]: a lightweight copyable handle into the arena
//! - Exact arithmetic: addition, convolution product, division, integer
//!   powers, composition, reversion, differentiation, integration
//! - Self-referential definitions: `exp`, `sin`/`cos`, square roots and
//!   compositional inverses are fixed points that read their own earlier
//!   coefficients
//!
//! # Laziness
//!
//! No operation ever materializes more than the coefficients a caller
//! asks for. Algorithms are productive corecursions: each requested
//! coefficient is derivable after finitely many steps from coefficients
//! that were already forced. Forcing the same tail twice returns the
//! cached node without re-running its computation.
//!
//! # Known limitation
//!
//! Dividing two series that are identically zero never terminates: the
//! common-factor cancellation loop keeps searching for a nonzero
//! coefficient that does not exist. Taking the square root of the zero
//! series runs into the same search. Both cases are left unguarded on
//! purpose — there is no finite prefix after which the answer could be
//! decided.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod elementary;
pub mod error;
pub mod functional;
pub mod ops;
pub mod view;

#[cfg(test)]
mod proptests;

pub use arena::{Coeff, Series, SeriesArena};
pub use error::SeriesError;
