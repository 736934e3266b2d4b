//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the bracket, keeping the half whose endpoints still
/// straddle the root. Convergence is judged on the residual `|f(x)|` only,
/// so `config.tolerance` is in the units of `f`, not of `x`.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at endpoints)
///
/// When the iteration budget is exhausted, or the bracket shrinks to float
/// resolution without meeting the tolerance, the last midpoint is returned
/// with `converged == false`.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = evaluate(&f, lo)?;
    let f_hi = evaluate(&f, hi)?;

    // Check that root is bracketed
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Handle case where endpoint is the root
    if config.accepts(f_lo) {
        return Ok(SolverResult::converged(lo, 0, f_lo));
    }
    if config.accepts(f_hi) {
        return Ok(SolverResult::converged(hi, 0, f_hi));
    }

    let mut mid = (lo + hi) / 2.0;
    let mut f_mid = f_lo;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        mid = (lo + hi) / 2.0;
        f_mid = evaluate(&f, mid)?;
        iterations += 1;

        if config.accepts(f_mid) {
            return Ok(SolverResult::converged(mid, iterations, f_mid));
        }

        // Keep the half whose endpoints still differ in sign
        if (f_mid > 0.0) == (f_lo > 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }

        if hi - lo <= f64::EPSILON * mid.abs().max(1.0) {
            log::debug!("bisection bracket collapsed at {mid} with residual {f_mid:.3e}");
            break;
        }
    }

    Ok(SolverResult::best_effort(mid, iterations, f_mid))
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
