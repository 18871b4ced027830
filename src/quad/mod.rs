//! Adaptive numerical integration of scalar functions over finite intervals.
//!
//! [`quad`] applies the 15-point Gauss–Kronrod rule (with its embedded
//! 7-point Gauss rule for error estimation) and repeatedly bisects the
//! subinterval carrying the largest error until the global error estimate
//! meets the requested tolerance. Subintervals live in a fixed-capacity
//! stack array, so integration is allocation-free and no-std compatible.
//!
//! # Example
//!
//! ```
//! use laplace_coeffs::quad::{quad, QuadSettings};
//!
//! // ∫₀^π sin x dx = 2
//! let r = quad(|x: f64| x.sin(), 0.0, core::f64::consts::PI, &QuadSettings::default()).unwrap();
//! assert!((r.value - 2.0).abs() < 1e-12);
//! assert!(r.abs_err < 1e-12);
//! ```

mod adaptive;
mod kronrod;


pub use adaptive::quad;

use core::fmt;

/// Fixed capacity of the subinterval store.
pub const MAX_SUBDIVISIONS: usize = 256;

/// Errors from adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadError {
    /// Tolerance not met before the subdivision limit was reached.
    MaxSubdivisions,
    /// The integrand produced NaN or infinity.
    NotFinite,
    /// Negative or NaN tolerance, or a subdivision limit of zero or above
    /// [`MAX_SUBDIVISIONS`].
    InvalidSettings,
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSubdivisions => write!(f, "maximum number of subdivisions reached"),
            Self::NotFinite => write!(f, "integrand is not finite"),
            Self::InvalidSettings => write!(f, "invalid quadrature settings"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuadError {}

/// Settings for adaptive quadrature.
#[derive(Debug, Clone, Copy)]
pub struct QuadSettings<T> {
    /// Absolute error tolerance (default: 1e-12).
    pub abs_tol: T,
    /// Relative error tolerance (default: 1e-12).
    pub rel_tol: T,
    /// Maximum number of subintervals before returning
    /// [`QuadError::MaxSubdivisions`] (default: 200, at most [`MAX_SUBDIVISIONS`]).
    pub max_subdivisions: usize,
}

impl Default for QuadSettings<f64> {
    fn default() -> Self {
        Self {
            abs_tol: 1e-12,
            rel_tol: 1e-12,
            max_subdivisions: 200,
        }
    }
}

impl Default for QuadSettings<f32> {
    fn default() -> Self {
        Self {
            abs_tol: 1e-6,
            rel_tol: 1e-6,
            max_subdivisions: 200,
        }
    }
}

/// Result of an adaptive integration.
#[derive(Debug, Clone, Copy)]
pub struct QuadResult<T> {
    /// Integral estimate.
    pub value: T,
    /// Estimated absolute error of `value`.
    pub abs_err: T,
    /// Number of integrand evaluations.
    pub evals: usize,
    /// Number of subintervals in the final partition.
    pub subdivisions: usize,
}
