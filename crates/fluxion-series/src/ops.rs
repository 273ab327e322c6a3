//! Ring-lifted arithmetic and the convolution engine.
//!
//! The constructors lift ring values into series; the arithmetic
//! operators lift ring operations coefficient-wise; multiplication and
//! division are productive corecursions over the Cauchy product.

use crate::arena::{Coeff, Series, SeriesArena};
use crate::error::SeriesError;

impl<R: Coeff> SeriesArena<R> {
    /// The series whose every coefficient is zero.
    ///
    /// Stored as a single node whose tail is the node itself; repeated
    /// calls return the same handle.
    pub fn zero(&mut self) -> Series {
        if let Some(z) = self.cached_zero() {
            return z;
        }
        let z = Series::new(self.next_index());
        let pushed = self.cons(R::zero(), z);
        debug_assert_eq!(pushed, z);
        self.set_cached_zero(z);
        z
    }

    /// The series `c + 0·x + 0·x² + …`.
    pub fn constant(&mut self, c: R) -> Series {
        let z = self.zero();
        self.cons(c, z)
    }

    /// The series `1`.
    pub fn one(&mut self) -> Series {
        self.constant(R::one())
    }

    /// The series `x`.
    pub fn identity(&mut self) -> Series {
        let z = self.zero();
        let x = self.cons(R::one(), z);
        self.cons(R::zero(), x)
    }

    /// Builds a series whose prefix is the given coefficients and which
    /// is zero thereafter.
    pub fn of_coeffs(&mut self, coeffs: Vec<R>) -> Series {
        let mut s = self.zero();
        for c in coeffs.into_iter().rev() {
            s = self.cons(c, s);
        }
        s
    }

    /// Coefficient-wise negation.
    pub fn negate(&mut self, f: Series) -> Series {
        let head = -self.head(f);
        self.defer(head, move |a| {
            let t = a.tail(f);
            a.negate(t)
        })
    }

    /// Coefficient-wise multiplication by a constant.
    pub fn scale(&mut self, c: R, f: Series) -> Series {
        let head = c.clone() * self.head(f);
        self.defer(head, move |a| {
            let t = a.tail(f);
            a.scale(c, t)
        })
    }

    /// Coefficient-wise sum.
    pub fn add(&mut self, f: Series, g: Series) -> Series {
        let head = self.head(f) + self.head(g);
        self.defer(head, move |a| {
            let ft = a.tail(f);
            let gt = a.tail(g);
            a.add(ft, gt)
        })
    }

    /// Coefficient-wise difference, `f + (-g)`.
    pub fn sub(&mut self, f: Series, g: Series) -> Series {
        let neg = self.negate(g);
        self.add(f, neg)
    }

    /// The Cauchy product `f · g`.
    ///
    /// Corecursive convolution: the first coefficient is `f₀·g₀` and the
    /// remainder is `f₀ · tail(g) + tail(f) · g`. Each coefficient is
    /// produced from already-forced prefixes of both operands, so the
    /// product of productive series is productive. Materializing the
    /// first n coefficients costs O(n²) ring operations, the cost of the
    /// convolution sum itself; memoization ensures each sub-product is
    /// forced only once per level.
    pub fn mul(&mut self, f: Series, g: Series) -> Series {
        let head = self.head(f) * self.head(g);
        self.defer(head, move |a| {
            let f0 = a.head(f);
            let gt = a.tail(g);
            let left = a.scale(f0, gt);
            let ft = a.tail(f);
            let right = a.mul(ft, g);
            a.add(left, right)
        })
    }

    /// The quotient `f / g` of formal power series.
    ///
    /// While both leading coefficients are zero, a common factor of `x`
    /// is cancelled from numerator and denominator. Once the
    /// denominator's leading coefficient is nonzero the quotient is an
    /// ordinary power series, produced one coefficient at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::UnequalValuation`] if the numerator reaches
    /// a nonzero coefficient while the denominator is still zero: the
    /// quotient would need negative powers of `x`.
    ///
    /// # Divergence
    ///
    /// If both operands are identically the zero series the cancellation
    /// loop never terminates. See the crate-level documentation; the case
    /// is deliberately left unguarded.
    pub fn div(&mut self, f: Series, g: Series) -> Result<Series, SeriesError> {
        let mut f = f;
        let mut g = g;
        loop {
            if !self.head(g).is_zero() {
                return Ok(self.div_normalized(f, g));
            }
            if !self.head(f).is_zero() {
                return Err(SeriesError::UnequalValuation);
            }
            f = self.tail(f);
            g = self.tail(g);
        }
    }

    /// Division once the denominator's leading coefficient is known to be
    /// nonzero. The denominator is fixed across the corecursion, so no
    /// further checks are needed.
    pub(crate) fn div_normalized(&mut self, f: Series, g: Series) -> Series {
        let q = self.head(f).field_div(&self.head(g));
        let head = q.clone();
        self.defer(head, move |a| {
            let gt = a.tail(g);
            let scaled = a.scale(q, gt);
            let ft = a.tail(f);
            let num = a.sub(ft, scaled);
            a.div_normalized(num, g)
        })
    }

    /// Raises a series to a non-negative integer power by repeated
    /// multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NegativeExponent`] for `n < 0`.
    pub fn pow(&mut self, f: Series, n: i64) -> Result<Series, SeriesError> {
        if n < 0 {
            return Err(SeriesError::NegativeExponent(n));
        }
        let mut acc = self.one();
        for _ in 0..n {
            acc = self.mul(acc, f);
        }
        Ok(acc)
    }
}
