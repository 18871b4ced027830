//! Gauss hypergeometric function ₂F₁(a, b; c; z) for real arguments z ≤ 1.

use crate::FloatScalar;
use super::{gamma_sign, is_non_positive_integer, lgamma, SpecialError};

/// Maximum number of series terms before reporting non-convergence.
///
/// The series converges like zⁿ, so arguments close to 1 need thousands of
/// terms; this bound still leaves room for z ≈ 0.9999.
const MAX_TERMS: usize = 200_000;

/// Below this argument the power series is summed directly; further out
/// negative arguments go through the Pfaff transformation first.
const PFAFF_THRESHOLD: f64 = -0.5;

/// Gauss hypergeometric function ₂F₁(a, b; c; z).
///
/// ```text
/// ₂F₁(a, b; c; z) = Σ_{n≥0} (a)_n (b)_n / ((c)_n n!) · zⁿ
/// ```
///
/// where (x)_n = x(x+1)…(x+n−1) is the rising factorial.
///
/// Evaluation strategy:
/// - a or b a non-positive integer: the series terminates and is summed exactly.
/// - −0.5 ≤ z < 1: direct power series.
/// - z < −0.5: Pfaff transformation
///   ₂F₁(a, b; c; z) = (1−z)^{−a} ₂F₁(a, c−b; c; z/(z−1)), mapping z into (1/3, 1).
/// - z = 1: Gauss summation Γ(c)Γ(c−a−b) / (Γ(c−a)Γ(c−b)) when c − a − b > 0.
///
/// # Errors
///
/// Returns [`SpecialError::DomainError`] for NaN input, z > 1, z = 1 with
/// c − a − b ≤ 0 (the series diverges), or c a non-positive integer that the
/// series reaches before terminating.
/// Returns [`SpecialError::ConvergenceFailure`] if the series does not settle
/// within the term limit or overflows.
///
/// # Example
///
/// ```
/// use laplace_coeffs::special::hyp2f1;
///
/// // ₂F₁(a, b; b; z) = (1 − z)^{−a}
/// let f = hyp2f1(0.5_f64, 2.0, 2.0, 0.25).unwrap();
/// assert!((f - 0.75_f64.powf(-0.5)).abs() < 1e-14);
///
/// // arcsin(x)/x = ₂F₁(1/2, 1/2; 3/2; x²)
/// let x = 0.6_f64;
/// let f = hyp2f1(0.5, 0.5, 1.5, x * x).unwrap();
/// assert!((f - x.asin() / x).abs() < 1e-13);
/// ```
pub fn hyp2f1<T: FloatScalar>(a: T, b: T, c: T, z: T) -> Result<T, SpecialError> {
    let zero = T::zero();
    let one = T::one();

    if a.is_nan() || b.is_nan() || c.is_nan() || z.is_nan() {
        return Err(SpecialError::DomainError);
    }
    if is_non_positive_integer(c) && !terminates_before(a, c) && !terminates_before(b, c) {
        return Err(SpecialError::DomainError);
    }
    if z == zero || a == zero || b == zero {
        return Ok(one);
    }

    if is_non_positive_integer(a) {
        return Ok(polynomial(a, b, c, z));
    }
    if is_non_positive_integer(b) {
        return Ok(polynomial(b, a, c, z));
    }

    if z > one {
        return Err(SpecialError::DomainError);
    }
    if z == one {
        return gauss_sum(a, b, c);
    }
    if z < T::from(PFAFF_THRESHOLD).unwrap() {
        let w = z / (z - one);
        return Ok((one - z).powf(-a) * hyp2f1(a, c - b, c, w)?);
    }

    series(a, b, c, z)
}

/// True when `a` is a non-positive integer whose terminating series stops
/// before the denominator (c)_n reaches zero.
#[inline]
fn terminates_before<T: FloatScalar>(a: T, c: T) -> bool {
    is_non_positive_integer(a) && a >= c
}

/// Finite sum for a = −m (m = 0, 1, 2, …): degree-m polynomial in z.
fn polynomial<T: FloatScalar>(a: T, b: T, c: T, z: T) -> T {
    let one = T::one();
    let degree = (-a).to_usize().unwrap_or(0);

    let mut sum = one;
    let mut term = one;
    for k in 0..degree {
        let kf = T::from(k).unwrap();
        term = term * (a + kf) * (b + kf) / ((c + kf) * (kf + one)) * z;
        sum = sum + term;
    }
    sum
}

/// Direct power series, stopped once a term no longer changes the sum.
fn series<T: FloatScalar>(a: T, b: T, c: T, z: T) -> Result<T, SpecialError> {
    let one = T::one();
    let eps = T::epsilon();

    let mut sum = one;
    let mut term = one;
    for n in 0..MAX_TERMS {
        let nf = T::from(n).unwrap();
        term = term * (a + nf) * (b + nf) / ((c + nf) * (nf + one)) * z;
        sum = sum + term;

        if !sum.is_finite() {
            tracing::warn!(terms = n + 1, ?a, ?b, ?c, ?z, "hypergeometric series overflowed");
            return Err(SpecialError::ConvergenceFailure);
        }
        if term.abs() <= eps * sum.abs() {
            return Ok(sum);
        }
    }

    tracing::warn!(terms = MAX_TERMS, ?a, ?b, ?c, ?z, "hypergeometric series did not converge");
    Err(SpecialError::ConvergenceFailure)
}

/// Gauss's summation theorem at z = 1, evaluated in log space with signs.
fn gauss_sum<T: FloatScalar>(a: T, b: T, c: T) -> Result<T, SpecialError> {
    let cab = c - a - b;
    if cab <= T::zero() {
        return Err(SpecialError::DomainError);
    }
    // A pole of Γ in the denominator makes the whole ratio vanish.
    if is_non_positive_integer(c - a) || is_non_positive_integer(c - b) {
        return Ok(T::zero());
    }

    let sign = gamma_sign(c) * gamma_sign(cab) * gamma_sign(c - a) * gamma_sign(c - b);
    let ln = lgamma(c) + lgamma(cab) - lgamma(c - a) - lgamma(c - b);
    Ok(sign * ln.exp())
}
