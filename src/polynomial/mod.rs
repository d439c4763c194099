//! Scalar polynomial evaluation and node generation.
//!
//! This module provides:
//! - Legendre polynomials (three-term recurrence) and their derivatives
//! - Chebyshev polynomials of the first kind
//! - Gauss-Lobatto-Legendre nodes and weights
//! - Chebyshev-Lobatto and equispaced node sets

mod chebyshev;
mod legendre;
mod nodes;

pub use chebyshev::chebyshev;
pub use legendre::{legendre, legendre_and_derivative, legendre_norm};
pub use nodes::{
    chebyshev_lobatto_nodes, equispaced_nodes, gauss_lobatto_nodes, gauss_lobatto_weights,
};
