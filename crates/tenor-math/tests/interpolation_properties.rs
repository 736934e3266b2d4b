//! Property-based tests for linear interpolation.
//!
//! - Knot identity: interpolating at a stored x returns the stored y exactly
//! - No overshoot: results stay within the bracketing knot values
//! - Flat boundaries: out-of-range queries return the end values

use proptest::prelude::*;
use tenor_math::interpolation::{Interpolator, LinearInterpolator};

/// Strictly increasing xs built from positive gaps, with matching ys.
fn knots() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.001f64..5.0, -10.0f64..10.0), 1..20).prop_map(|pairs| {
        let mut x = 20.0;
        let mut xs = Vec::with_capacity(pairs.len());
        let mut ys = Vec::with_capacity(pairs.len());
        for (gap, y) in pairs {
            x += gap;
            xs.push(x);
            ys.push(y);
        }
        (xs, ys)
    })
}

proptest! {
    #[test]
    fn identity_at_knots((xs, ys) in knots()) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            prop_assert_eq!(interp.interpolate(*x).unwrap(), *y);
        }
    }

    #[test]
    fn bounded_by_bracketing_knots((xs, ys) in knots(), frac in 0.0f64..1.0) {
        prop_assume!(xs.len() >= 2);
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for i in 0..xs.len() - 1 {
            let x = xs[i] + frac * (xs[i + 1] - xs[i]);
            let y = interp.interpolate(x).unwrap();
            prop_assert!(y >= ys[i].min(ys[i + 1]));
            prop_assert!(y <= ys[i].max(ys[i + 1]));
        }
    }

    #[test]
    fn flat_outside_range((xs, ys) in knots(), offset in 0.0f64..100.0) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        let first = ys[0];
        let last = ys[ys.len() - 1];
        prop_assert_eq!(interp.interpolate(xs[0] - offset).unwrap(), first);
        prop_assert_eq!(interp.interpolate(xs[xs.len() - 1] + offset).unwrap(), last);
    }
}
