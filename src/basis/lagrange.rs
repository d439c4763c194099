//! Lagrange nodal basis.
//!
//! For distinct nodes x_0, ..., x_N:
//! φ_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)
//!
//! so φ_i(x_j) = δ_ij and the coefficients of an interpolant are its nodal
//! values. The denominators Π_{j≠i} (x_i - x_j) are precomputed once at
//! construction.
//!
//! Products over thousands of nodes leave the range of f64 part way through
//! even when the final quotient is of order one, so they are accumulated as
//! a mantissa and a count of factored-out powers of 2^256.

use super::vandermonde::{count_distinct, fit_concrete, validate_nodes};
use super::{FitConfig, PolynomialBasis, check_index};
use crate::error::{BasisError, NodeArray};
use crate::polynomial::{chebyshev_lobatto_nodes, equispaced_nodes, gauss_lobatto_nodes};
use ndarray::{ArrayD, ArrayViewD};

const RESCALE: f64 = 1.157920892373162e77; // 2^256
const RESCALE_INV: f64 = 8.636168555094445e-78; // 2^-256

/// Product of `factors` as `(mantissa, k)` with value `mantissa * 2^(256 k)`.
fn scaled_product(factors: impl Iterator<Item = f64>) -> (f64, i32) {
    let mut mantissa = 1.0_f64;
    let mut exponent = 0;
    for factor in factors {
        mantissa *= factor;
        let magnitude = mantissa.abs();
        if magnitude > RESCALE {
            mantissa *= RESCALE_INV;
            exponent += 1;
        } else if magnitude > 0.0 && magnitude < RESCALE_INV {
            mantissa *= RESCALE;
            exponent -= 1;
        }
    }
    (mantissa, exponent)
}

/// `value * 2^(256 exponent)`, one power at a time so intermediates stay finite.
fn unscale(mut value: f64, mut exponent: i32) -> f64 {
    while exponent > 0 {
        value *= RESCALE;
        exponent -= 1;
    }
    while exponent < 0 {
        value *= RESCALE_INV;
        exponent += 1;
    }
    value
}

/// Lagrange polynomials over a fixed set of distinct nodes.
///
/// Evaluation stays accurate to degrees in the thousands on Chebyshev or
/// Gauss-Lobatto nodes; on equispaced nodes the basis itself is
/// ill-conditioned long before that.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeBasis {
    nodes: Vec<f64>,
    denominators: Vec<(f64, i32)>,
    fit_config: FitConfig,
}

impl LagrangeBasis {
    /// Build the basis for `nodes`; the degree is `nodes.len() - 1`.
    ///
    /// # Errors
    /// * [`BasisError::EmptyNodes`] for an empty node set
    /// * [`BasisError::NonFinite`] for NaN or infinite nodes
    /// * [`BasisError::DegenerateNodes`] if two nodes coincide
    pub fn new(nodes: Vec<f64>) -> Result<Self, BasisError> {
        if nodes.is_empty() {
            return Err(BasisError::EmptyNodes);
        }
        if let Some(index) = nodes.iter().position(|x| !x.is_finite()) {
            return Err(BasisError::NonFinite {
                array: NodeArray::Locations,
                index,
            });
        }
        let distinct = count_distinct(&nodes);
        if distinct < nodes.len() {
            return Err(BasisError::DegenerateNodes {
                distinct,
                required: nodes.len(),
            });
        }

        let denominators = nodes
            .iter()
            .enumerate()
            .map(|(i, &xi)| {
                scaled_product(
                    nodes
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, &xj)| xi - xj),
                )
            })
            .collect();

        Ok(Self {
            nodes,
            denominators,
            fit_config: FitConfig::default(),
        })
    }

    /// Lagrange basis on the Gauss-Lobatto-Legendre nodes of [-1, 1].
    pub fn gauss_lobatto(degree: usize) -> Result<Self, BasisError> {
        Self::new(gauss_lobatto_nodes(degree))
    }

    /// Lagrange basis on the Chebyshev-Lobatto nodes of [-1, 1].
    pub fn chebyshev(degree: usize) -> Result<Self, BasisError> {
        Self::new(chebyshev_lobatto_nodes(degree))
    }

    /// Lagrange basis on `degree + 1` equispaced nodes of [a, b].
    pub fn equispaced(degree: usize, a: f64, b: f64) -> Result<Self, BasisError> {
        Self::new(equispaced_nodes(degree, a, b))
    }

    pub fn with_fit_config(mut self, fit_config: FitConfig) -> Self {
        self.fit_config = fit_config;
        self
    }

    pub fn fit_config(&self) -> &FitConfig {
        &self.fit_config
    }

    /// The interpolation nodes, in construction order.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn value(&self, index: usize, t: f64) -> f64 {
        let xi = self.nodes[index];
        if t == xi {
            return 1.0;
        }
        let (numerator, num_exp) = scaled_product(
            self.nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != index)
                .map(|(_, &xj)| t - xj),
        );
        let (denominator, den_exp) = self.denominators[index];
        unscale(numerator / denominator, num_exp - den_exp)
    }
}

impl PolynomialBasis for LagrangeBasis {
    type Error = BasisError;

    fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    fn evaluate_basis(
        &self,
        index: usize,
        x: ArrayViewD<'_, f64>,
    ) -> Result<ArrayD<f64>, BasisError> {
        check_index(index, self.n_dofs())?;
        Ok(x.mapv(|t| self.value(index, t)))
    }

    /// Nodal values are the coefficients when `x_nodes` are the basis nodes;
    /// any other node set goes through the Vandermonde solve.
    fn fit(&self, x_nodes: &[f64], y_nodes: &[f64]) -> Result<Vec<f64>, BasisError> {
        if x_nodes == self.nodes.as_slice() {
            validate_nodes(x_nodes, y_nodes, self.n_dofs(), &self.fit_config)?;
            log::debug!("Lagrange fit on own nodes, {} coefficients", self.n_dofs());
            return Ok(y_nodes.to_vec());
        }
        fit_concrete(self, x_nodes, y_nodes, &self.fit_config)
    }
}
