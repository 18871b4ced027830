use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::quad::QuadSettings;
use crate::FloatScalar;
use super::coefficient::evaluate;
use super::{validate, LaplaceError, Method};

/// Memoized evaluator for the derivatives of b_s^j(α) at fixed (α, s).
///
/// Runs the same recurrence as [`derivative`](super::derivative), but every
/// node (s-shift k, j, n), standing for D^n b_{s+k}^j(α), is computed once
/// and cached. The naive recursion revisits the same nodes exponentially
/// often; here the cost grows polynomially in n. Values equal the recursive
/// evaluation for the same inputs.
///
/// # Example
///
/// ```
/// use laplace_coeffs::{derivative, LaplaceTable, Method};
///
/// let mut table = LaplaceTable::new(0.480597_f64, 0.5, Method::Hypergeometric).unwrap();
/// let d6 = table.derivative(3, 6).unwrap();
/// assert_eq!(d6, derivative(0.480597_f64, 0.5, 3, 6, Method::Hypergeometric).unwrap());
///
/// // Repeated requests are served from the cache
/// let before = table.len();
/// assert_eq!(table.derivative(3, 6).unwrap(), d6);
/// assert_eq!(table.len(), before);
/// ```
#[derive(Debug, Clone)]
pub struct LaplaceTable<T: FloatScalar> {
    alpha: T,
    method: Method,
    settings: QuadSettings<T>,
    /// `exponents[k]` is s after k unit shifts, built by repeated `+ 1`.
    exponents: Vec<T>,
    nodes: BTreeMap<(usize, i64, i32), T>,
}

impl<T: FloatScalar> LaplaceTable<T> {
    /// Table for (α, s) with default quadrature settings.
    ///
    /// # Errors
    ///
    /// [`LaplaceError::AlphaOutOfRange`] or [`LaplaceError::NegativeExponent`].
    pub fn new(alpha: T, s: T, method: Method) -> Result<Self, LaplaceError>
    where
        QuadSettings<T>: Default,
    {
        Self::with_settings(alpha, s, method, QuadSettings::default())
    }

    /// Table for (α, s) with explicit quadrature settings.
    ///
    /// # Errors
    ///
    /// [`LaplaceError::AlphaOutOfRange`] or [`LaplaceError::NegativeExponent`].
    pub fn with_settings(
        alpha: T,
        s: T,
        method: Method,
        settings: QuadSettings<T>,
    ) -> Result<Self, LaplaceError> {
        validate(alpha, s)?;
        Ok(Self { alpha, method, settings, exponents: vec![s], nodes: BTreeMap::new() })
    }

    /// Semi-major axis ratio the table was built for.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Base exponent s the table was built for.
    pub fn s(&self) -> T {
        self.exponents[0]
    }

    /// Evaluation method used for every leaf.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Number of cached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been evaluated yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// b_s^j(α).
    ///
    /// # Errors
    ///
    /// Computation errors of the chosen method; see
    /// [`coefficient_with`](super::coefficient_with).
    pub fn coefficient(&mut self, j: i32) -> Result<T, LaplaceError> {
        self.node(0, i64::from(j), 0)
    }

    /// D^n b_s^j(α); zero for n < 0.
    ///
    /// # Errors
    ///
    /// Computation errors of the chosen method, including for n < 0, where
    /// the coefficient is still evaluated. Failed nodes are not cached.
    pub fn derivative(&mut self, j: i32, n: i32) -> Result<T, LaplaceError> {
        self.node(0, i64::from(j), n)
    }

    fn exponent(&mut self, shift: usize) -> T {
        while self.exponents.len() <= shift {
            let last = self.exponents[self.exponents.len() - 1];
            self.exponents.push(last + T::one());
        }
        self.exponents[shift]
    }

    fn node(&mut self, shift: usize, j: i64, n: i32) -> Result<T, LaplaceError> {
        if n < 0 {
            // Zero weight, but the leaf must still evaluate.
            self.node(shift, j, 0)?;
            return Ok(T::zero());
        }
        if let Some(&v) = self.nodes.get(&(shift, j, n)) {
            return Ok(v);
        }

        let s = self.exponent(shift);
        let value = if n == 0 {
            evaluate(self.alpha, s, j, self.method, &self.settings)?
        } else {
            let one = T::one();
            let two = one + one;
            let down = self.node(shift + 1, j - 1, n - 1)?;
            let mid = self.node(shift + 1, j, n - 1)?;
            let up = self.node(shift + 1, j + 1, n - 1)?;
            let lower = self.node(shift + 1, j, n - 2)?;
            let order = T::from(n - 1).unwrap();
            s * (down - two * self.alpha * mid + up - two * order * lower)
        };

        self.nodes.insert((shift, j, n), value);
        Ok(value)
    }
}
