//! The classical elementary series, defined as fixed points of the
//! integration operator.
//!
//! Each definition is the textbook integral equation taken literally:
//! the right-hand side mentions the series being defined, and the
//! placeholder machinery in `arena` ties the knot. Integration reads its
//! argument one step behind the coefficient it produces, so every
//! definition is productive.

use crate::arena::{Coeff, Series, SeriesArena};
use crate::error::SeriesError;

impl<R: Coeff> SeriesArena<R> {
    /// The exponential series, `exp = 1 + ∫ exp`.
    pub fn exp(&mut self) -> Series {
        self.fixed_point(|arena, e| {
            let int = arena.integral(e);
            let one = arena.one();
            arena.add(one, int)
        })
    }

    /// The sine and cosine series, defined mutually:
    /// `sin = ∫ cos` and `cos = 1 − ∫ sin`.
    ///
    /// Both bindings are established before either series can be forced.
    pub fn sin_cos(&mut self) -> (Series, Series) {
        let sin = self.declare();
        let cos = self.declare();

        let sin_def = self.integral(cos);
        let sin_int = self.integral(sin);
        let one = self.one();
        let cos_def = self.sub(one, sin_int);

        self.bind(sin, sin_def);
        self.bind(cos, cos_def);
        (sin, cos)
    }

    /// The sine series.
    pub fn sin(&mut self) -> Series {
        self.sin_cos().0
    }

    /// The cosine series.
    pub fn cos(&mut self) -> Series {
        self.sin_cos().1
    }

    /// The tangent series, `sin / cos`.
    pub fn tan(&mut self) -> Series {
        let (sin, cos) = self.sin_cos();
        // cos has unit constant term, so the quotient needs no
        // valuation adjustment.
        self.div_normalized(sin, cos)
    }

    /// The formal square root of a series.
    ///
    /// The leading coefficients are inspected level by level: a leading
    /// `x²` factor is stripped and re-applied as a single `x` on the
    /// result; once the leading coefficient is one, the root is the fixed
    /// point `q = 1 + ∫ (f' / (q + q))`, obtained by differentiating
    /// `q² = f`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NoSquareRoot`] when the analysis finds a
    /// leading coefficient that is neither zero nor one, or a lone zero
    /// at an odd position — in both cases no square root exists in the
    /// coefficient field as formalized here.
    ///
    /// # Divergence
    ///
    /// The square root of the identically-zero series never terminates,
    /// for the same reason dividing zero by zero never does: the level
    /// inspection keeps searching for a nonzero coefficient.
    pub fn sqrt(&mut self, f: Series) -> Result<Series, SeriesError> {
        let mut g = f;
        let mut stripped = 0usize;
        loop {
            let g0 = self.head(g);
            if g0.is_one() {
                break;
            }
            if !g0.is_zero() {
                return Err(SeriesError::NoSquareRoot);
            }
            let t = self.tail(g);
            if !self.head(t).is_zero() {
                return Err(SeriesError::NoSquareRoot);
            }
            // sqrt(x²·h) = x·sqrt(h)
            g = self.tail(t);
            stripped += 1;
        }

        let root = self.fixed_point(|arena, q| {
            arena.defer(R::one(), move |a| {
                let num = a.derivative(g);
                let den = a.add(q, q);
                let ratio = a.div_normalized(num, den);
                let int = a.integral(ratio);
                let one = a.one();
                let s = a.add(one, int);
                a.tail(s)
            })
        });

        let mut result = root;
        for _ in 0..stripped {
            result = self.cons(R::zero(), result);
        }
        Ok(result)
    }
}
