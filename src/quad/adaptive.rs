use core::cmp::Ordering;

use crate::FloatScalar;
use super::kronrod::{kronrod15, Segment, EVALS_PER_RULE, ROUNDOFF_FACTOR};
use super::{QuadError, QuadResult, QuadSettings, MAX_SUBDIVISIONS};

/// Adaptive Gauss–Kronrod integration of `f` over `[a, b]`.
///
/// Starts from a single 15-point rule over the whole interval. While the
/// summed error estimate exceeds `max(abs_tol, rel_tol · |value|)`, the
/// subinterval with the largest error is bisected and both halves are
/// re-integrated. Subintervals whose error is already at the rounding floor
/// are never split. The same holds for both halves of a bisection that
/// leaves the error where it was and moves the value by no more than the
/// rounding floor of the parent: the error estimate is then integrand noise
/// (typical in `f32` near sharp peaks). If only such subintervals remain,
/// the current estimate is returned since no further accuracy is attainable
/// in this precision.
///
/// `b < a` is allowed and yields the negated integral.
///
/// # Errors
///
/// Returns [`QuadError::InvalidSettings`] for a negative or NaN tolerance or
/// an out-of-range subdivision limit.
/// Returns [`QuadError::NotFinite`] if the integrand yields NaN or infinity.
/// Returns [`QuadError::MaxSubdivisions`] if the tolerance is not met within
/// `settings.max_subdivisions` subintervals.
///
/// # Example
///
/// ```
/// use laplace_coeffs::quad::{quad, QuadSettings};
///
/// // ∫₀¹ 4/(1+x²) dx = π
/// let r = quad(|x: f64| 4.0 / (1.0 + x * x), 0.0, 1.0, &QuadSettings::default()).unwrap();
/// assert!((r.value - core::f64::consts::PI).abs() < 1e-13);
/// ```
pub fn quad<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &QuadSettings<T>,
) -> Result<QuadResult<T>, QuadError> {
    let zero = T::zero();
    let stall_ratio = T::from(0.99).unwrap();
    let fifty_eps = T::from(ROUNDOFF_FACTOR).unwrap() * T::epsilon();

    if !(settings.abs_tol >= zero)
        || !(settings.rel_tol >= zero)
        || settings.max_subdivisions == 0
        || settings.max_subdivisions > MAX_SUBDIVISIONS
    {
        return Err(QuadError::InvalidSettings);
    }
    if a == b {
        return Ok(QuadResult { value: zero, abs_err: zero, evals: 0, subdivisions: 0 });
    }

    let first = kronrod15(&mut f, a, b);
    if !first.value.is_finite() || !first.error.is_finite() {
        return Err(QuadError::NotFinite);
    }

    let mut segments = [first; MAX_SUBDIVISIONS];
    let mut count = 1usize;
    let mut evals = EVALS_PER_RULE;

    let (value, abs_err) = loop {
        let (value, abs_err) = totals(&segments[..count]);
        let tol = settings.abs_tol.max(settings.rel_tol * value.abs());
        if abs_err <= tol {
            break (value, abs_err);
        }

        // Largest error among segments that can still be refined
        let worst = (0..count)
            .filter(|&i| !segments[i].at_roundoff)
            .max_by(|&i, &k| {
                segments[i]
                    .error
                    .partial_cmp(&segments[k].error)
                    .unwrap_or(Ordering::Equal)
            });
        let Some(worst) = worst else {
            tracing::debug!(?value, ?abs_err, ?tol, "quadrature limited by rounding error");
            break (value, abs_err);
        };

        if count >= settings.max_subdivisions {
            tracing::warn!(
                subdivisions = count,
                ?value,
                ?abs_err,
                ?tol,
                "quadrature did not reach tolerance"
            );
            return Err(QuadError::MaxSubdivisions);
        }

        let parent = segments[worst];
        let Segment { a: lo, b: hi, .. } = parent;
        let mid = T::from(0.5).unwrap() * (lo + hi);
        if mid == lo || mid == hi {
            // Interval too narrow to represent a midpoint.
            segments[worst].at_roundoff = true;
            continue;
        }

        let mut left = kronrod15(&mut f, lo, mid);
        let mut right = kronrod15(&mut f, mid, hi);
        evals += 2 * EVALS_PER_RULE;
        if !(left.value.is_finite() && right.value.is_finite())
            || !(left.error.is_finite() && right.error.is_finite())
        {
            return Err(QuadError::NotFinite);
        }

        // Bisection gained nothing: both halves are at the noise level.
        if left.error + right.error >= stall_ratio * parent.error
            && (left.value + right.value - parent.value).abs() <= fifty_eps * parent.res_abs
        {
            left.at_roundoff = true;
            right.at_roundoff = true;
        }

        segments[worst] = left;
        segments[count] = right;
        count += 1;
    };

    tracing::debug!(?value, ?abs_err, evals, subdivisions = count, "quadrature converged");

    Ok(QuadResult { value, abs_err, evals, subdivisions: count })
}

/// Summed value and error over the current partition.
fn totals<T: FloatScalar>(segments: &[Segment<T>]) -> (T, T) {
    segments.iter().fold((T::zero(), T::zero()), |(v, e), s| (v + s.value, e + s.error))
}
