//! Legendre basis on [-1, 1].
//!
//! With normalization, φ_j(x) = sqrt((2j+1)/2) * P_j(x) so that
//! ∫ φ_i φ_j dx = δ_{ij}; otherwise φ_j = P_j with P_j(1) = 1.

use super::vandermonde::fit_concrete;
use super::{FitConfig, PolynomialBasis, check_index};
use crate::error::BasisError;
use crate::polynomial::{legendre, legendre_norm};
use ndarray::{ArrayD, ArrayViewD};

/// Legendre polynomials P_0, ..., P_degree.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreBasis {
    degree: usize,
    normalized: bool,
    fit_config: FitConfig,
}

impl LegendreBasis {
    /// Standard Legendre polynomials, P_j(1) = 1.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            normalized: false,
            fit_config: FitConfig::default(),
        }
    }

    /// L2-orthonormal Legendre polynomials on [-1, 1].
    pub fn normalized(degree: usize) -> Self {
        Self {
            normalized: true,
            ..Self::new(degree)
        }
    }

    pub fn with_fit_config(mut self, fit_config: FitConfig) -> Self {
        self.fit_config = fit_config;
        self
    }

    pub fn fit_config(&self) -> &FitConfig {
        &self.fit_config
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }
}

impl PolynomialBasis for LegendreBasis {
    type Error = BasisError;

    fn degree(&self) -> usize {
        self.degree
    }

    fn evaluate_basis(
        &self,
        index: usize,
        x: ArrayViewD<'_, f64>,
    ) -> Result<ArrayD<f64>, BasisError> {
        check_index(index, self.n_dofs())?;
        let norm = if self.normalized {
            legendre_norm(index)
        } else {
            1.0
        };
        Ok(x.mapv(|t| norm * legendre(index, t)))
    }

    fn fit(&self, x_nodes: &[f64], y_nodes: &[f64]) -> Result<Vec<f64>, BasisError> {
        fit_concrete(self, x_nodes, y_nodes, &self.fit_config)
    }
}
