//! A small tour of lazy series arithmetic.
//!
//! Run with `cargo run --example series_demo`.

use fluxion::prelude::*;

fn q(n: i64, d: i64) -> Q {
    Q::new(n, d)
}

fn main() {
    let mut arena = SeriesArena::<Q>::new();

    let exp = arena.exp();
    println!("exp  = {}", arena.preview(exp));
    println!("     = {:?}", arena.take(6, exp));

    let (sin, cos) = arena.sin_cos();
    println!("sin  = {:?}", arena.take(6, sin));
    println!("cos  = {:?}", arena.take(6, cos));

    let tan = arena.tan();
    println!("tan  = {:?}", arena.take(6, tan));

    // 1/(1-x), the geometric series
    let one = arena.one();
    let den = arena.of_coeffs(vec![q(1, 1), q(-1, 1)]);
    let geo = arena.div(one, den).expect("denominator has nonzero constant term");
    println!("1/(1-x) = {:?}", arena.take(6, geo));

    // The compositional inverse of x + x² carries the Catalan numbers.
    let f = arena.of_coeffs(vec![q(0, 1), q(1, 1), q(1, 1)]);
    let inv = arena.revert(f).expect("series vanishes at the origin");
    println!("revert(x + x^2) = {:?}", arena.take(6, inv));

    // Truncated evaluation: exp(1/2) from ten terms.
    let approx = arena.eval(10, &q(1, 2), exp);
    println!("exp(1/2) ~ {approx}");
}
