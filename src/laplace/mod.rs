//! Laplace coefficients b_s^j(α) and their derivatives with respect to α.
//!
//! ```text
//! b_s^j(α) = (1/π) ∫₀^{2π} cos(jθ) / (1 − 2α cos θ + α²)^s dθ
//! ```
//!
//! These are the Fourier coefficients of the inverse-distance expansion
//! between two orbits with semi-major axis ratio α (Murray & Dermott,
//! *Solar System Dynamics*, §6.4) and the building blocks of secular and
//! resonant disturbing-function terms.
//!
//! # Methods
//!
//! | [`Method`] | Evaluation | Notes |
//! |------------|------------|-------|
//! | [`Method::Hypergeometric`] | 2 (s)_j / j! · α^j · ₂F₁(s, s+j; j+1; α²) | default, fast |
//! | [`Method::Quadrature`] | adaptive Gauss–Kronrod over one period | independent cross-check |
//!
//! Derivatives D^n b_s^j(α) use the recurrence
//!
//! ```text
//! D^n b_s^j = s · [ D^{n−1} b_{s+1}^{j−1} − 2α D^{n−1} b_{s+1}^{j}
//!                   + D^{n−1} b_{s+1}^{j+1} − 2(n−1) D^{n−2} b_{s+1}^{j} ]
//! ```
//!
//! with D^0 b = b and D^n b = 0 for n < 0. The whole tree is evaluated with
//! the method chosen at the top. [`LaplaceTable`] (requires `alloc`) caches
//! the tree nodes when many derivatives of one (α, s) are needed.
//!
//! # Example
//!
//! ```
//! use laplace_coeffs::{coefficient, derivative, Method};
//!
//! let alpha = 0.480597_f64; // near the 3:1 mean-motion resonance
//!
//! let b = coefficient(alpha, 0.5, 0, Method::Hypergeometric).unwrap();
//! assert!((0.5 * b - 1.06671).abs() < 1e-5);
//!
//! // Same coefficient by direct integration
//! let q = coefficient(alpha, 0.5, 0, Method::Quadrature).unwrap();
//! assert!((b - q).abs() < 1e-10);
//!
//! let db = derivative(alpha, 0.5, 0, 1, Method::default()).unwrap();
//! assert!(db > 0.0);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::quad::QuadError;
use crate::special::SpecialError;
use crate::FloatScalar;

mod coefficient;
mod derivative;
#[cfg(feature = "alloc")]
mod table;


pub use coefficient::{coefficient, coefficient_with};
pub use derivative::{derivative, derivative_with};
#[cfg(feature = "alloc")]
pub use table::LaplaceTable;

/// Evaluation method for the base coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Closed form through the Gauss hypergeometric function.
    #[default]
    Hypergeometric,
    /// Direct adaptive integration of the defining integral.
    Quadrature,
}

impl FromStr for Method {
    type Err = LaplaceError;

    /// Accepts `"hyper"`, `"hypergeometric"`, `"closed-form"`, `"brute"` and
    /// `"quadrature"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hyper" | "hypergeometric" | "closed-form" => Ok(Self::Hypergeometric),
            "brute" | "quadrature" => Ok(Self::Quadrature),
            _ => Err(LaplaceError::InvalidMethod),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypergeometric => write!(f, "hypergeometric"),
            Self::Quadrature => write!(f, "quadrature"),
        }
    }
}

/// Errors from Laplace coefficient evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaplaceError {
    /// Method name not recognized.
    InvalidMethod,
    /// α > 1 (or NaN).
    AlphaOutOfRange,
    /// s < 0 (or NaN).
    NegativeExponent,
    /// Hypergeometric evaluation failed.
    Special(SpecialError),
    /// Numerical integration failed.
    Quadrature(QuadError),
    /// The computed value was NaN or infinity.
    NotFinite,
}

impl LaplaceError {
    /// True for invalid (α, s) inputs.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::AlphaOutOfRange | Self::NegativeExponent)
    }

    /// True when validation passed but the numerics failed.
    pub fn is_computation_error(&self) -> bool {
        matches!(self, Self::Special(_) | Self::Quadrature(_) | Self::NotFinite)
    }
}

impl fmt::Display for LaplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMethod => write!(f, "method must be 'hyper' or 'brute'"),
            Self::AlphaOutOfRange => {
                write!(f, "semi-major axis ratio alpha must be between 0 and 1")
            }
            Self::NegativeExponent => write!(f, "s must be a positive half-integer"),
            Self::Special(e) => write!(f, "hypergeometric evaluation failed: {e}"),
            Self::Quadrature(e) => write!(f, "quadrature failed: {e}"),
            Self::NotFinite => write!(f, "computed value is NaN or infinity"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LaplaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Special(e) => Some(e),
            Self::Quadrature(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpecialError> for LaplaceError {
    fn from(e: SpecialError) -> Self {
        Self::Special(e)
    }
}

impl From<QuadError> for LaplaceError {
    fn from(e: QuadError) -> Self {
        Self::Quadrature(e)
    }
}

/// Input checks shared by every entry point, run before any numerics.
///
/// Only the upper bound on α is enforced; NaN fails both checks.
pub(crate) fn validate<T: FloatScalar>(alpha: T, s: T) -> Result<(), LaplaceError> {
    if !(alpha <= T::one()) {
        return Err(LaplaceError::AlphaOutOfRange);
    }
    if !(s >= T::zero()) {
        return Err(LaplaceError::NegativeExponent);
    }
    Ok(())
}
