use crate::quad::{quad, QuadError, QuadSettings};
use crate::special::{hyp2f1, SpecialError};
use crate::FloatScalar;
use super::{validate, LaplaceError, Method};

/// Laplace coefficient b_s^j(α) with default quadrature settings.
///
/// See [`coefficient_with`].
///
/// # Example
///
/// ```
/// use laplace_coeffs::{coefficient, Method};
///
/// // b_{1/2}^1(0.5)
/// let b = coefficient(0.5_f64, 0.5, 1, Method::Hypergeometric).unwrap();
/// assert!((b - 0.555866197926681).abs() < 1e-10);
///
/// // Even in j
/// let b_neg = coefficient(0.5_f64, 0.5, -1, Method::Hypergeometric).unwrap();
/// assert_eq!(b, b_neg);
/// ```
pub fn coefficient<T: FloatScalar>(alpha: T, s: T, j: i32, method: Method) -> Result<T, LaplaceError>
where
    QuadSettings<T>: Default,
{
    coefficient_with(alpha, s, j, method, &QuadSettings::default())
}

/// Laplace coefficient b_s^j(α).
///
/// `settings` only affects [`Method::Quadrature`]. Close to α = 1 the
/// integrand peaks sharply at θ = 0 and its evaluation loses digits to
/// cancellation in 1 − 2α cos θ + α², so the default f64 tolerance is out of
/// reach (around α ≈ 0.9999 the run ends in [`QuadError::MaxSubdivisions`]
/// whatever `max_subdivisions` is). Loosen `abs_tol`/`rel_tol` there, e.g.
/// to 1e-10, or use [`Method::Hypergeometric`].
///
/// # Errors
///
/// Returns [`LaplaceError::AlphaOutOfRange`] if α > 1 and
/// [`LaplaceError::NegativeExponent`] if s < 0, before any numerics run.
/// Failures of ₂F₁ or of the integration are wrapped in
/// [`LaplaceError::Special`] / [`LaplaceError::Quadrature`]; a NaN or infinite
/// result is [`LaplaceError::NotFinite`].
pub fn coefficient_with<T: FloatScalar>(
    alpha: T,
    s: T,
    j: i32,
    method: Method,
    settings: &QuadSettings<T>,
) -> Result<T, LaplaceError> {
    validate(alpha, s)?;
    evaluate(alpha, s, i64::from(j), method, settings)
}

/// Unvalidated evaluation on the widened index used by the derivative recursion.
pub(crate) fn evaluate<T: FloatScalar>(
    alpha: T,
    s: T,
    j: i64,
    method: Method,
    settings: &QuadSettings<T>,
) -> Result<T, LaplaceError> {
    tracing::trace!(?alpha, ?s, j, %method, "laplace coefficient");

    let value = match method {
        Method::Hypergeometric => hypergeometric(alpha, s, j)?,
        Method::Quadrature => quadrature(alpha, s, j, settings)?,
    };

    if !value.is_finite() {
        return Err(LaplaceError::NotFinite);
    }
    Ok(value)
}

/// b = 2 · (s)_j / j! · α^j · ₂F₁(s, s+j; j+1; α²) with j ← |j|.
fn hypergeometric<T: FloatScalar>(alpha: T, s: T, j: i64) -> Result<T, SpecialError> {
    let one = T::one();
    let j = j.unsigned_abs();

    // (s)_j / j! · α^j accumulated factor by factor so j! never overflows
    let mut prefactor = one;
    for k in 0..j {
        let kf = T::from(k).unwrap();
        prefactor = prefactor * (s + kf) / (kf + one) * alpha;
    }

    let jf = T::from(j).unwrap();
    let f = hyp2f1(s, s + jf, jf + one, alpha * alpha)?;
    Ok((one + one) * prefactor * f)
}

/// b = (1/π) ∫₀^{2π} cos(jθ) (1 − 2α cos θ + α²)^{−s} dθ.
fn quadrature<T: FloatScalar>(
    alpha: T,
    s: T,
    j: i64,
    settings: &QuadSettings<T>,
) -> Result<T, QuadError> {
    let one = T::one();
    let two = one + one;
    let jf = T::from(j).unwrap();
    let base = one + alpha * alpha;

    let integrand = |theta: T| (jf * theta).cos() * (base - two * alpha * theta.cos()).powf(-s);
    let r = quad(integrand, T::zero(), two * T::PI(), settings)?;
    Ok(r.value / T::PI())
}
