//! Basis-function expansions.
//!
//! A function in a finite-dimensional space is stored as a coefficient vector
//! `c` over a fixed basis {φ_0, ..., φ_N} and evaluated as
//!
//! ```text
//! p(x) = Σ_i c_i φ_i(x),    i = 0, ..., n_dofs - 1
//! ```
//!
//! [`PolynomialBasis`] is the contract every basis implements: evaluation of a
//! single basis function and fitting of coefficients from nodal data. The
//! weighted sum itself is provided on top of those two capabilities.
//!
//! Concrete bases:
//! - [`MonomialBasis`]: φ_i(x) = x^i
//! - [`LegendreBasis`]: φ_i(x) = P_i(x), optionally L2-normalized on [-1, 1]
//! - [`ChebyshevBasis`]: φ_i(x) = T_i(x)
//! - [`LagrangeBasis`]: nodal functions with φ_i(x_j) = δ_ij
//!
//! # Example
//!
//! ```
//! use polybasis::{MonomialBasis, PolynomialBasis};
//!
//! let basis = MonomialBasis::new(2);
//! assert_eq!(basis.n_dofs(), 3);
//!
//! // p(x) = 1 + 2x + 3x^2
//! let y = basis.evaluate_points(&[1.0, 2.0, 3.0], &[0, 1, 2]).unwrap();
//! assert_eq!(y.as_slice().unwrap(), &[1.0, 6.0, 17.0]);
//! ```

mod chebyshev;
mod config;
mod lagrange;
mod legendre;
mod monomial;
mod points;
mod vandermonde;

pub use chebyshev::ChebyshevBasis;
pub use config::{FitConfig, FitMode};
pub use lagrange::LagrangeBasis;
pub use legendre::LegendreBasis;
pub use monomial::MonomialBasis;
pub use points::Points;
pub use vandermonde::{fit_nodes, generalized_vandermonde, solve_fit};
#[cfg(feature = "parallel")]
pub use vandermonde::{fit_nodes_parallel, generalized_vandermonde_parallel};

use crate::error::BasisError;
use ndarray::{ArrayD, ArrayViewD};

/// A fixed family of basis functions spanning an (n_dofs)-dimensional space.
///
/// Implementors provide [`degree`](Self::degree),
/// [`evaluate_basis`](Self::evaluate_basis) and [`fit`](Self::fit).
/// [`evaluate`](Self::evaluate) is derived from them and may be overridden by
/// an equivalent, faster algorithm.
///
/// Instances are immutable once constructed: `degree` and therefore `n_dofs`
/// never change, so a basis can be shared across threads whenever the
/// implementing type is `Sync`.
pub trait PolynomialBasis {
    /// Error surfaced by this basis. Errors raised by the provided methods are
    /// converted from [`BasisError`]; errors from `evaluate_basis` and `fit`
    /// pass through untouched.
    type Error: From<BasisError>;

    /// Maximum polynomial degree representable.
    fn degree(&self) -> usize;

    /// Number of basis functions, always `degree + 1`.
    #[inline]
    fn n_dofs(&self) -> usize {
        self.degree() + 1
    }

    /// Evaluate φ_index at every point of `x`, returning an array of the same shape.
    fn evaluate_basis(&self, index: usize, x: ArrayViewD<'_, f64>)
    -> Result<ArrayD<f64>, Self::Error>;

    /// Compute `n_dofs` coefficients whose expansion reproduces `y_nodes` at
    /// `x_nodes`, exactly or in the least-squares sense.
    fn fit(&self, x_nodes: &[f64], y_nodes: &[f64]) -> Result<Vec<f64>, Self::Error>;

    /// Evaluate p(x) = Σ_i c_i φ_i(x) at every point of `x`.
    ///
    /// Terms are accumulated in increasing basis index with plain
    /// floating-point addition, starting from zero.
    ///
    /// # Errors
    /// * [`BasisError::CoefficientCount`] if `coefficients.len() != n_dofs`
    /// * [`BasisError::ShapeMismatch`] if a basis function returns the wrong shape
    /// * any error of [`evaluate_basis`](Self::evaluate_basis), unchanged
    fn evaluate(
        &self,
        coefficients: &[f64],
        x: ArrayViewD<'_, f64>,
    ) -> Result<ArrayD<f64>, Self::Error> {
        let n_dofs = self.n_dofs();
        if coefficients.len() != n_dofs {
            return Err(BasisError::CoefficientCount {
                expected: n_dofs,
                actual: coefficients.len(),
            }
            .into());
        }

        let mut y = ArrayD::<f64>::zeros(x.raw_dim());
        for (i, &c) in coefficients.iter().enumerate() {
            let phi = self.evaluate_basis(i, x.view())?;
            if phi.shape() != x.shape() {
                return Err(BasisError::ShapeMismatch {
                    expected: x.shape().to_vec(),
                    actual: phi.shape().to_vec(),
                }
                .into());
            }
            y.scaled_add(c, &phi);
        }

        Ok(y)
    }

    /// [`evaluate`](Self::evaluate) for any numeric input type.
    ///
    /// Both arguments are converted to `f64` first; the output has the shape
    /// of `x`.
    fn evaluate_points<C, P>(&self, coefficients: &C, x: &P) -> Result<ArrayD<f64>, Self::Error>
    where
        Self: Sized,
        C: Points + ?Sized,
        P: Points + ?Sized,
    {
        let coefficients = coefficients.to_flat_vec();
        let x = x.to_points();
        self.evaluate(&coefficients, x.view())
    }

    /// [`fit`](Self::fit) for any numeric input type.
    fn fit_points<X, Y>(&self, x_nodes: &X, y_nodes: &Y) -> Result<Vec<f64>, Self::Error>
    where
        Self: Sized,
        X: Points + ?Sized,
        Y: Points + ?Sized,
    {
        self.fit(&x_nodes.to_flat_vec(), &y_nodes.to_flat_vec())
    }
}

/// Reject basis indices outside `[0, n_dofs)`.
pub(crate) fn check_index(index: usize, n_dofs: usize) -> Result<(), BasisError> {
    if index >= n_dofs {
        return Err(BasisError::IndexOutOfRange { index, n_dofs });
    }
    Ok(())
}
