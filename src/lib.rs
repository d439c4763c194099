//! # polybasis
//!
//! Polynomials represented as coefficient vectors over a fixed basis.
//!
//! This crate provides:
//! - The [`PolynomialBasis`] contract: per-function evaluation, fitting, and
//!   evaluation of the weighted sum Σ c_i φ_i(x) over arrays of any shape
//! - Monomial, Legendre, Chebyshev and Lagrange bases
//! - Generalized Vandermonde assembly and interpolation / least-squares fitting
//! - Scalar recurrences and node sets (Gauss-Lobatto-Legendre, Chebyshev-Lobatto,
//!   equispaced)
//!
//! # Example
//!
//! ```
//! use polybasis::{ChebyshevBasis, PolynomialBasis, chebyshev_lobatto_nodes};
//!
//! let basis = ChebyshevBasis::new(4);
//! let nodes = chebyshev_lobatto_nodes(4);
//! let values: Vec<f64> = nodes.iter().map(|x| x.exp()).collect();
//!
//! let coefficients = basis.fit(&nodes, &values).unwrap();
//! let y = basis.evaluate_points(&coefficients, &[0.0]).unwrap();
//! assert!((y[[0]] - 1.0).abs() < 1e-2);
//! ```

pub mod basis;
pub mod error;
pub mod polynomial;

pub use basis::{
    ChebyshevBasis, FitConfig, FitMode, LagrangeBasis, LegendreBasis, MonomialBasis, Points,
    PolynomialBasis, fit_nodes, generalized_vandermonde, solve_fit,
};
#[cfg(feature = "parallel")]
pub use basis::{fit_nodes_parallel, generalized_vandermonde_parallel};
pub use error::{BasisError, NodeArray};
pub use polynomial::{
    chebyshev, chebyshev_lobatto_nodes, equispaced_nodes, gauss_lobatto_nodes,
    gauss_lobatto_weights, legendre, legendre_and_derivative, legendre_norm,
};
