//! Finite views over infinite series: prefix extraction, truncated
//! evaluation and a bounded display.

use std::fmt::Display;

use crate::arena::{Coeff, Series, SeriesArena};

impl<R: Coeff> SeriesArena<R> {
    /// Materializes the first `n` coefficients.
    ///
    /// Forces exactly `n` coefficients and always terminates; `n = 0`
    /// yields an empty vector.
    pub fn take(&mut self, n: usize, f: Series) -> Vec<R> {
        let mut out = Vec::with_capacity(n);
        let mut cur = f;
        for _ in 0..n {
            out.push(self.head(cur));
            cur = self.tail(cur);
        }
        out
    }

    /// Truncated evaluation at a point: `Σᵢ f[i]·xⁱ` for `i < n`,
    /// computed as a Horner fold over exactly `n` coefficients.
    ///
    /// When the coefficient field carries a notion of convergence (the
    /// rationals, say) this approximates the function the series
    /// represents, with error bounded by the discarded remainder; over
    /// other fields it is a purely formal truncation.
    pub fn eval(&mut self, n: usize, x: &R, f: Series) -> R {
        let mut acc = R::zero();
        for c in self.take(n, f).into_iter().rev() {
            acc = c + x.clone() * acc;
        }
        acc
    }

    /// Compares the first `n` coefficients of two series.
    pub fn eq_prefix(&mut self, n: usize, f: Series, g: Series) -> bool {
        let mut f = f;
        let mut g = g;
        for _ in 0..n {
            if self.head(f) != self.head(g) {
                return false;
            }
            f = self.tail(f);
            g = self.tail(g);
        }
        true
    }
}

impl<R: Coeff + Display> SeriesArena<R> {
    /// Renders the first three coefficients followed by a continuation
    /// marker — a debugging aid, not a parseable format.
    pub fn preview(&mut self, f: Series) -> String {
        let rendered: Vec<String> = self
            .take(3, f)
            .iter()
            .map(ToString::to_string)
            .collect();
        format!("[{}, ...]", rendered.join(", "))
    }
}
