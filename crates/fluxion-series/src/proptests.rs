//! Property-based tests for series arithmetic laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::SeriesArena;
    use fluxion_rings::rationals::Q;

    // Strategy for small rational coefficients
    fn small_q() -> impl Strategy<Value = Q> {
        (-20i64..20i64, 1i64..8i64).prop_map(|(n, d)| Q::new(n, d))
    }

    // Strategy for a nonzero rational
    fn nonzero_q() -> impl Strategy<Value = Q> {
        (prop_oneof![(-20i64..=-1i64), (1i64..=20i64)], 1i64..8i64)
            .prop_map(|(n, d)| Q::new(n, d))
    }

    // Strategy for a short coefficient prefix
    fn coeffs() -> impl Strategy<Value = Vec<Q>> {
        proptest::collection::vec(small_q(), 0..6)
    }

    const PREFIX: usize = 10;

    proptest! {
        #[test]
        fn add_commutative(f in coeffs(), g in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let gs = a.of_coeffs(g);
            let fg = a.add(fs, gs);
            let gf = a.add(gs, fs);
            prop_assert!(a.eq_prefix(PREFIX, fg, gf));
        }

        #[test]
        fn add_associative(f in coeffs(), g in coeffs(), h in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let gs = a.of_coeffs(g);
            let hs = a.of_coeffs(h);
            let left_inner = a.add(fs, gs);
            let left = a.add(left_inner, hs);
            let right_inner = a.add(gs, hs);
            let right = a.add(fs, right_inner);
            prop_assert!(a.eq_prefix(PREFIX, left, right));
        }

        #[test]
        fn add_zero_identity(f in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let zero = a.zero();
            let sum = a.add(fs, zero);
            prop_assert!(a.eq_prefix(PREFIX, sum, fs));
        }

        #[test]
        fn sub_self_is_zero(f in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let diff = a.sub(fs, fs);
            let zero = a.zero();
            prop_assert!(a.eq_prefix(PREFIX, diff, zero));
        }

        #[test]
        fn mul_commutative(f in coeffs(), g in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let gs = a.of_coeffs(g);
            let fg = a.mul(fs, gs);
            let gf = a.mul(gs, fs);
            prop_assert!(a.eq_prefix(PREFIX, fg, gf));
        }

        #[test]
        fn mul_one_identity(f in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let one = a.one();
            let prod = a.mul(fs, one);
            prop_assert!(a.eq_prefix(PREFIX, prod, fs));
        }

        #[test]
        fn mul_zero_annihilates(f in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let zero = a.zero();
            let prod = a.mul(fs, zero);
            prop_assert!(a.eq_prefix(PREFIX, prod, zero));
        }

        #[test]
        fn mul_distributes_over_add(f in coeffs(), g in coeffs(), h in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let gs = a.of_coeffs(g);
            let hs = a.of_coeffs(h);
            let sum = a.add(gs, hs);
            let left = a.mul(fs, sum);
            let fg = a.mul(fs, gs);
            let fh = a.mul(fs, hs);
            let right = a.add(fg, fh);
            prop_assert!(a.eq_prefix(PREFIX, left, right));
        }

        #[test]
        fn div_then_mul_restores(f in coeffs(), g0 in nonzero_q(), g_rest in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let mut g = vec![g0];
            g.extend(g_rest);
            let gs = a.of_coeffs(g);
            let quot = a.div(fs, gs).unwrap();
            let back = a.mul(quot, gs);
            prop_assert!(a.eq_prefix(PREFIX, back, fs));
        }

        #[test]
        fn derivative_of_integral_restores(f in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let int = a.integral(fs);
            let back = a.derivative(int);
            prop_assert!(a.eq_prefix(PREFIX, back, fs));
        }

        #[test]
        fn compose_with_identity_restores(f in coeffs()) {
            let mut a = SeriesArena::new();
            let fs = a.of_coeffs(f);
            let x = a.identity();
            let c = a.compose(fs, x).unwrap();
            prop_assert!(a.eq_prefix(PREFIX, c, fs));
        }
    }
}
