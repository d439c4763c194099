//! Monomial basis φ_i(x) = x^i.

use super::vandermonde::fit_concrete;
use super::{FitConfig, PolynomialBasis, check_index};
use crate::error::BasisError;
use ndarray::{ArrayD, ArrayViewD};

/// Monomial basis {1, x, x², ..., x^degree}.
///
/// 0⁰ evaluates to 1, so the constant term is defined everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct MonomialBasis {
    degree: usize,
    fit_config: FitConfig,
}

impl MonomialBasis {
    /// Create a monomial basis up to `degree`, fitting by interpolation.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            fit_config: FitConfig::default(),
        }
    }

    /// Replace the fit configuration.
    pub fn with_fit_config(mut self, fit_config: FitConfig) -> Self {
        self.fit_config = fit_config;
        self
    }

    /// Current fit configuration.
    pub fn fit_config(&self) -> &FitConfig {
        &self.fit_config
    }
}

impl PolynomialBasis for MonomialBasis {
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
        let power = i32::try_from(index).map_err(|_| BasisError::IndexOutOfRange {
            index,
            n_dofs: self.n_dofs(),
        })?;
        Ok(x.mapv(|t| t.powi(power)))
    }

    fn fit(&self, x_nodes: &[f64], y_nodes: &[f64]) -> Result<Vec<f64>, BasisError> {
        fit_concrete(self, x_nodes, y_nodes, &self.fit_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    #[test]
    fn test_basis_values() {
        let basis = MonomialBasis::new(3);
        let x = Array1::from(vec![0.0, -2.0, 0.5]).into_dyn();

        let phi0 = basis.evaluate_basis(0, x.view()).unwrap();
        assert_eq!(phi0.as_slice().unwrap(), &[1.0, 1.0, 1.0]);

        let phi3 = basis.evaluate_basis(3, x.view()).unwrap();
        assert_eq!(phi3.as_slice().unwrap(), &[0.0, -8.0, 0.125]);
    }

    #[test]
    fn test_index_out_of_range() {
        let basis = MonomialBasis::new(2);
        let x = Array1::from(vec![1.0]).into_dyn();
        assert_eq!(
            basis.evaluate_basis(3, x.view()).unwrap_err(),
            BasisError::IndexOutOfRange {
                index: 3,
                n_dofs: 3
            }
        );
    }

    #[test]
    fn test_fit_recovers_cubic() {
        let basis = MonomialBasis::new(3);
        let x = [-1.0, -0.25, 0.5, 2.0];
        // y = 2 - x + 0.5 x^3
        let y: Vec<f64> = x.iter().map(|&t| 2.0 - t + 0.5 * t * t * t).collect();

        let c = basis.fit(&x, &y).unwrap();
        let expected = [2.0, -1.0, 0.0, 0.5];
        for (ci, ei) in c.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*ci, *ei, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fit_degree_zero() {
        let basis = MonomialBasis::new(0);
        let c = basis.fit(&[3.0], &[7.5]).unwrap();
        assert_eq!(c.len(), 1);
        assert_abs_diff_eq!(c[0], 7.5, epsilon = 1e-14);
    }

    #[test]
    fn test_fit_config_roundtrip() {
        let basis = MonomialBasis::new(1).with_fit_config(FitConfig::least_squares());
        assert_eq!(basis.fit_config(), &FitConfig::least_squares());
    }
}
