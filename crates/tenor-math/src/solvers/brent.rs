//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines the reliability of bisection with the speed of the secant method
/// and inverse quadratic interpolation. Converges when either the residual
/// drops below `config.tolerance` or the bracket narrows to it.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at endpoints)
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-8);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = evaluate(&f, a)?;
    let mut fb = evaluate(&f, b)?;

    // Check that root is bracketed
    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    if config.accepts(fa) {
        return Ok(SolverResult::converged(a, 0, fa));
    }
    if config.accepts(fb) {
        return Ok(SolverResult::converged(b, 0, fb));
    }

    // c is the contrapoint: f(b) and f(c) always straddle the root
    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        // Keep b as the best estimate
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let xm = 0.5 * (c - b);

        if xm.abs() <= tol1 || config.accepts(fb) {
            return Ok(SolverResult::converged(b, iteration, fb));
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant step
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = evaluate(&f, b)?;
    }

    log::debug!(
        "brent exhausted {} iterations at {b} with residual {fb:.3e}",
        config.max_iterations
    );
    Ok(SolverResult::best_effort(b, config.max_iterations, fb))
}

fn evaluate<F>(f: &F, x: f64) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::domain_error(x, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_cubic() {
        let f = |x: f64| x * x * x - x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-8);
    }

    #[test]
    fn test_faster_than_bisection() {
        let f = |x: f64| x.exp() - 3.0;
        let config = SolverConfig::new(1e-12, 200);

        let fast = brent(f, 0.0, 2.0, &config).unwrap();
        let slow = crate::solvers::bisection(f, 0.0, 2.0, &config).unwrap();

        assert_relative_eq!(fast.root, 3.0_f64.ln(), epsilon = 1e-10);
        assert!(fast.iterations < slow.iterations);
    }

    #[test]
    fn test_ytm_like_objective() {
        // 5 annual coupons of 5 on 100, priced at 95
        let f = |y: f64| {
            let mut pv = 0.0;
            for t in 1..=5 {
                pv += 5.0 / (1.0 + y).powi(t);
            }
            pv + 100.0 / (1.0 + y).powi(5) - 95.0
        };

        let result = brent(f, -0.99, 0.99, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert!(f(result.root).abs() < 1e-6);
        assert!(result.root > 0.05 && result.root < 0.07);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x + 1.0;

        let result = brent(f, -1.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_budget_exhausted_is_best_effort() {
        let f = |x: f64| x.powi(3) - 0.001;

        let result = brent(f, -1.0, 1.0, &SolverConfig::new(1e-300, 2)).unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 2);
        assert!(result.root > -1.0 && result.root < 1.0);
    }
}
