//! Chebyshev basis φ_i(x) = T_i(x).

use super::vandermonde::fit_concrete;
use super::{FitConfig, PolynomialBasis, check_index};
use crate::error::BasisError;
use crate::polynomial::chebyshev;
use ndarray::{ArrayD, ArrayViewD};

/// Chebyshev polynomials of the first kind T_0, ..., T_degree.
///
/// Well suited to fitting on [-1, 1] at Chebyshev-Lobatto nodes, where the
/// fit system stays well conditioned to high degree.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevBasis {
    degree: usize,
    fit_config: FitConfig,
}

impl ChebyshevBasis {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            fit_config: FitConfig::default(),
        }
    }

    pub fn with_fit_config(mut self, fit_config: FitConfig) -> Self {
        self.fit_config = fit_config;
        self
    }

    pub fn fit_config(&self) -> &FitConfig {
        &self.fit_config
    }
}

impl PolynomialBasis for ChebyshevBasis {
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
        Ok(x.mapv(|t| chebyshev(index, t)))
    }

    fn fit(&self, x_nodes: &[f64], y_nodes: &[f64]) -> Result<Vec<f64>, BasisError> {
        fit_concrete(self, x_nodes, y_nodes, &self.fit_config)
    }
}
