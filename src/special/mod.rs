//! Special mathematical functions backing the closed-form Laplace coefficient.
//!
//! All functions are generic over [`FloatScalar`] (f32/f64), no-std compatible,
//! and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`hyp2f1`] | Gauss hypergeometric function ₂F₁(a, b; c; z) |
//! | [`lgamma`] | Log-gamma ln \|Γ(x)\| |
//! | [`gamma_sign`] | Sign of Γ(x) |
//!
//! # Example
//!
//! ```
//! use laplace_coeffs::special::{hyp2f1, lgamma};
//!
//! // ln Γ(5) = ln 4!
//! assert!((lgamma(5.0_f64) - 24.0_f64.ln()).abs() < 1e-12);
//!
//! // ₂F₁(1, 1; 2; z) = −ln(1 − z) / z
//! let z = 0.3_f64;
//! let f = hyp2f1(1.0, 1.0, 2.0, z).unwrap();
//! assert!((f + (1.0 - z).ln() / z).abs() < 1e-13);
//! ```

use core::fmt;

use crate::FloatScalar;

mod gamma_fn;
mod hyp2f1;

#[cfg(test)]
mod tests;

pub use gamma_fn::{gamma_sign, lgamma};
#[cfg(test)]
pub(crate) use gamma_fn::gamma;
pub use hyp2f1::hyp2f1;

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Series did not converge within the iteration limit.
    ConvergenceFailure,
    /// Input outside the function's domain (e.g. z > 1 for ₂F₁, or z = 1 with c − a − b ≤ 0).
    DomainError,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceFailure => write!(f, "series did not converge"),
            Self::DomainError => write!(f, "input outside function domain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(T::from(LANCZOS_COEFFS[0]).unwrap(), |sum, (i, &c)| {
            sum + T::from(c).unwrap() / (z + T::from(i + 1).unwrap())
        })
}

/// True for 0, −1, −2, … (poles of Γ, terminating points of Pochhammer products).
#[inline]
pub(crate) fn is_non_positive_integer<T: FloatScalar>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}
