// Numerical quadrature for normalization constants
//
// Adaptive Simpson subdivision with a running estimate of the absolute
// integration error. Used to renormalize densities over their truncated
// support window.

use crate::error::Error;

const DEFAULT_TOLERANCE: f64 = 1.0e-10;
const MAX_DEPTH: u32 = 48;

/// A definite integral together with an estimate of its absolute error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    pub value: f64,
    pub error: f64,
}

/// Integrate `f` over `[a, b]` to the default tolerance.
pub fn integrate<F>(f: F, a: f64, b: f64) -> Result<Quadrature, Error>
where
    F: Fn(f64) -> f64,
{
    integrate_with_tolerance(f, a, b, DEFAULT_TOLERANCE)
}

/// Integrate `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// Each interval is halved until the two half-interval estimates agree with
/// the whole-interval estimate to within the (per-interval) tolerance.
/// Fails if an interval still disagrees after the subdivision budget is
/// spent.
pub fn integrate_with_tolerance<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
) -> Result<Quadrature, Error>
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);

    let mut error = 0.0;
    let value = subdivide(&f, a, b, fa, fm, fb, whole, tolerance, MAX_DEPTH, &mut error)?;
    Ok(Quadrature { value, error })
}

/// Simpson's rule on one interval, midpoint value already evaluated.
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn subdivide<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tolerance: f64,
    depth: u32,
    error: &mut f64,
) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;

    // Simpson halving gains a factor 16; |delta|/15 bounds the remaining error
    if delta.abs() <= 15.0 * tolerance {
        *error += delta.abs() / 15.0;
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        return Err(Error::QuadratureNotConverged {
            a,
            b,
            max_depth: MAX_DEPTH,
        });
    }
    let half_tol = 0.5 * tolerance;
    let l = subdivide(f, a, m, fa, flm, fm, left, half_tol, depth - 1, error)?;
    let r = subdivide(f, m, b, fm, frm, fb, right, half_tol, depth - 1, error)?;
    Ok(l + r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::gaussian_pdf;

    #[test]
    fn test_polynomial_exact() {
        // Simpson's rule is exact for cubics, so the first estimate stands
        let q = integrate(|x| x * x, 0.0, 1.0).unwrap();
        assert!((q.value - 1.0 / 3.0).abs() < 1e-12);

        let q = integrate(|x| x * x * x - 2.0 * x, -1.0, 2.0).unwrap();
        assert!((q.value - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_sine_over_half_period() {
        let q = integrate(f64::sin, 0.0, std::f64::consts::PI).unwrap();
        assert!((q.value - 2.0).abs() < 1e-9);
        assert!(q.error < 1e-8);
    }

    #[test]
    fn test_gaussian_window_mass() {
        // The +-3 sigma window holds 99.73% of the probability mass
        let (mean, sigma) = (6.1, 0.5);
        let q = integrate(
            |x| gaussian_pdf(x, mean, sigma),
            mean - 3.0 * sigma,
            mean + 3.0 * sigma,
        )
        .unwrap();
        assert!((q.value - 0.9973002039367398).abs() < 1e-8);
        assert!(q.error < 1e-8);
    }

    #[test]
    fn test_window_mass_independent_of_parameters() {
        let q1 = integrate(|x| gaussian_pdf(x, 6.1, 0.5), 4.6, 7.6).unwrap();
        let q2 = integrate(|x| gaussian_pdf(x, 12.2, 1.2), 8.6, 15.8).unwrap();
        assert!((q1.value - q2.value).abs() < 1e-8);
    }

    #[test]
    fn test_discontinuity_exhausts_budget() {
        // A step function can never satisfy a zero tolerance; the subdivision
        // budget must run out instead of recursing forever
        let step = |x: f64| if x < 1.0 / 3.0 { 0.0 } else { 1.0 };
        let result = integrate_with_tolerance(step, 0.0, 1.0, 0.0);
        assert!(matches!(result, Err(Error::QuadratureNotConverged { .. })));
    }
}
