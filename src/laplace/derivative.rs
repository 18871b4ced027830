use crate::quad::QuadSettings;
use crate::FloatScalar;
use super::coefficient::evaluate;
use super::{validate, LaplaceError, Method};

/// n-th derivative D^n b_s^j(α) with default quadrature settings.
///
/// See [`derivative_with`].
///
/// # Example
///
/// ```
/// use laplace_coeffs::{coefficient, derivative, Method};
///
/// let (alpha, s, j) = (0.3_f64, 1.5, 2);
///
/// // n = 0 is the coefficient itself, n < 0 vanishes
/// let b = coefficient(alpha, s, j, Method::Hypergeometric).unwrap();
/// assert_eq!(derivative(alpha, s, j, 0, Method::Hypergeometric).unwrap(), b);
/// assert_eq!(derivative(alpha, s, j, -1, Method::Hypergeometric).unwrap(), 0.0);
///
/// // First derivative against a central difference
/// let h = 1e-5;
/// let lo = coefficient(alpha - h, s, j, Method::Hypergeometric).unwrap();
/// let hi = coefficient(alpha + h, s, j, Method::Hypergeometric).unwrap();
/// let db = derivative(alpha, s, j, 1, Method::Hypergeometric).unwrap();
/// assert!((db - (hi - lo) / (2.0 * h)).abs() < 1e-8);
/// ```
pub fn derivative<T: FloatScalar>(
    alpha: T,
    s: T,
    j: i32,
    n: i32,
    method: Method,
) -> Result<T, LaplaceError>
where
    QuadSettings<T>: Default,
{
    derivative_with(alpha, s, j, n, method, &QuadSettings::default())
}

/// n-th derivative D^n b_s^j(α) with respect to α.
///
/// For n ≤ 0 the result is max(0, n+1) · b_s^j(α): the coefficient itself at
/// n = 0 and exactly zero below. For n > 0,
///
/// ```text
/// D^n b_s^j = s · [ D^{n−1} b_{s+1}^{j−1} − 2α D^{n−1} b_{s+1}^{j}
///                   + D^{n−1} b_{s+1}^{j+1} − 2(n−1) D^{n−2} b_{s+1}^{j} ]
/// ```
///
/// Every node of the recursion re-validates its own (α, s) and uses the same
/// `method` and `settings`. The tree has branching factor 3–4 and depth n, so
/// prefer [`LaplaceTable`](super::LaplaceTable) for large n.
///
/// # Errors
///
/// Same as [`coefficient_with`](super::coefficient_with); the first failing
/// leaf aborts the whole evaluation.
pub fn derivative_with<T: FloatScalar>(
    alpha: T,
    s: T,
    j: i32,
    n: i32,
    method: Method,
    settings: &QuadSettings<T>,
) -> Result<T, LaplaceError> {
    recurse(alpha, s, i64::from(j), n, method, settings)
}

fn recurse<T: FloatScalar>(
    alpha: T,
    s: T,
    j: i64,
    n: i32,
    method: Method,
    settings: &QuadSettings<T>,
) -> Result<T, LaplaceError> {
    validate(alpha, s)?;

    if n <= 0 {
        let weight = T::from((n + 1).max(0)).unwrap();
        return Ok(weight * evaluate(alpha, s, j, method, settings)?);
    }

    let one = T::one();
    let two = one + one;
    let s1 = s + one;

    let down = recurse(alpha, s1, j - 1, n - 1, method, settings)?;
    let mid = recurse(alpha, s1, j, n - 1, method, settings)?;
    let up = recurse(alpha, s1, j + 1, n - 1, method, settings)?;
    let lower = recurse(alpha, s1, j, n - 2, method, settings)?;

    let order = T::from(n - 1).unwrap();
    Ok(s * (down - two * alpha * mid + up - two * order * lower))
}
