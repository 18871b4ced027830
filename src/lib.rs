//! # laplace-coeffs
//!
//! Laplace coefficients b_s^j(α) and their derivatives with respect to α,
//! the building blocks of secular and resonant disturbing-function
//! expansions in celestial mechanics. Pure Rust, no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use laplace_coeffs::{coefficient, derivative, Method};
//!
//! // Murray & Dermott Table 6.1, α near the 3:1 mean-motion resonance
//! let a = 0.480597_f64;
//!
//! let a0 = 0.5 * coefficient(a, 0.5, 0, Method::Hypergeometric).unwrap();
//! assert!((a0 - 1.06671).abs() < 1e-5);
//!
//! let a1 = 0.125
//!     * (2.0 * a * derivative(a, 0.5, 0, 1, Method::Hypergeometric).unwrap()
//!         + a * a * derivative(a, 0.5, 0, 2, Method::Hypergeometric).unwrap());
//! assert!((a1 - 0.142097).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`laplace`] — [`coefficient`] and [`derivative`] with a choice of
//!   [`Method`]: closed form through ₂F₁ (default) or direct adaptive
//!   quadrature of the defining integral. [`LaplaceTable`] memoizes the
//!   derivative recursion (requires `alloc`).
//!
//! - [`special`] — Gauss hypergeometric function [`special::hyp2f1`] and
//!   the gamma function in sign/log form used for its z = 1 limit.
//!
//! - [`quad`] — Adaptive 15-point Gauss–Kronrod integration
//!   ([`quad::quad`]) with a fixed-capacity, allocation-free subinterval store.
//!
//! - [`traits`] — [`FloatScalar`], the `f32`/`f64` bound every routine is
//!   generic over.
//!
//! ## Diagnostics
//!
//! Evaluations emit [`tracing`] events (trace per coefficient, debug per
//! quadrature run, warn on non-convergence). Nothing is printed unless the
//! application installs a subscriber.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc` | via std  | [`LaplaceTable`] (heap-allocated memo table) |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod laplace;
pub mod quad;
pub mod special;
pub mod traits;

pub use laplace::{coefficient, coefficient_with, derivative, derivative_with, LaplaceError, Method};
#[cfg(feature = "alloc")]
pub use laplace::LaplaceTable;
pub use quad::{QuadError, QuadResult, QuadSettings};
pub use special::SpecialError;
pub use traits::FloatScalar;
