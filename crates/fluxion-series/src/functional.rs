//! Functional operators: composition, reversion, differentiation and
//! integration.
//!
//! Composition and reversion treat a series as a function of `x`;
//! differentiation and integration are the formal term-by-term
//! operators. Integration never reads its argument eagerly, which is
//! what makes the self-referential definitions in `elementary` legal.

use crate::arena::{Coeff, Series, SeriesArena};
use crate::error::SeriesError;

impl<R: Coeff> SeriesArena<R> {
    /// Computes the composition `f(g(x))`.
    ///
    /// The first output coefficient is `f₀`; the remainder is
    /// `tail(g) · (tail(f) ∘ g)`, which only ever combines coefficients
    /// of finite index because `g` has no constant term.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::CompositionConstantTerm`] unless the
    /// constant term of `g` is zero. Without that condition every output
    /// coefficient would be an infinite sum over powers of `g₀`.
    pub fn compose(&mut self, f: Series, g: Series) -> Result<Series, SeriesError> {
        if !self.head(g).is_zero() {
            return Err(SeriesError::CompositionConstantTerm);
        }
        Ok(self.compose_unchecked(f, g))
    }

    /// Composition for an inner series already known to have zero
    /// constant term.
    pub(crate) fn compose_unchecked(&mut self, f: Series, g: Series) -> Series {
        let head = self.head(f);
        self.defer(head, move |a| {
            let ft = a.tail(f);
            let inner = a.compose_unchecked(ft, g);
            let gt = a.tail(g);
            a.mul(gt, inner)
        })
    }

    /// Computes the compositional inverse `r` of `f`, the series with
    /// `f(r(x)) = x`.
    ///
    /// The inverse is a fixed point: `r` has zero constant term and its
    /// remainder is `1 / (tail(f) ∘ r)`, a definition that mentions `r`
    /// itself. The division is well-posed because `tail(f) ∘ r` starts
    /// with `f₁ ≠ 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ReversionConstantTerm`] unless the constant
    /// term of `f` is zero, and [`SeriesError::UnequalValuation`] if the
    /// linear coefficient of `f` is zero — the first coefficient of the
    /// inverse would already require dividing by zero.
    pub fn revert(&mut self, f: Series) -> Result<Series, SeriesError> {
        if !self.head(f).is_zero() {
            return Err(SeriesError::ReversionConstantTerm);
        }
        let ft = self.tail(f);
        if self.head(ft).is_zero() {
            return Err(SeriesError::UnequalValuation);
        }
        Ok(self.fixed_point(|arena, r| {
            arena.defer(R::zero(), move |a| {
                let inner = a.compose_unchecked(ft, r);
                let one = a.one();
                a.div_normalized(one, inner)
            })
        }))
    }

    /// The formal derivative: the coefficient at position n is
    /// `(n + 1) · f[n + 1]`.
    pub fn derivative(&mut self, f: Series) -> Series {
        let t = self.tail(f);
        self.derivative_from(t, R::one())
    }

    /// Walks a series multiplying by an incrementing ring element.
    fn derivative_from(&mut self, f: Series, n: R) -> Series {
        let head = self.head(f) * n.clone();
        let next = n + R::one();
        self.defer(head, move |a| {
            let t = a.tail(f);
            a.derivative_from(t, next)
        })
    }

    /// The formal integral with zero constant term: the coefficient at
    /// position n + 1 is `f[n] / (n + 1)`.
    ///
    /// The argument is not read until the integral's own tail is forced,
    /// so a series may be defined as an expression over its own integral.
    pub fn integral(&mut self, f: Series) -> Series {
        self.defer(R::zero(), move |a| a.integral_from(f, R::one()))
    }

    /// Walks a series dividing by an incrementing ring element.
    fn integral_from(&mut self, f: Series, n: R) -> Series {
        let head = self.head(f).field_div(&n);
        let next = n + R::one();
        self.defer(head, move |a| {
            let t = a.tail(f);
            a.integral_from(t, next)
        })
    }
}
