//! Generalized Vandermonde matrices and the fit solve.
//!
//! For nodes x_0, ..., x_{m-1} and a basis with n = n_dofs functions:
//! - V[i,j] = φ_j(x_i), an m × n matrix
//! - nodal values = V * coefficients
//! - interpolation (m = n): coefficients = V^{-1} * y
//! - least squares (m >= n): coefficients = (V^T V)^{-1} V^T y
//!
//! For the bases of this crate V has full column rank exactly when the nodes
//! hold at least n distinct locations, which is checked before any
//! factorization. Other bases can still produce a rank-deficient V (for
//! instance two identical basis functions); the solve detects that from the
//! pivots of V with its columns scaled to unit max-norm.

use super::{FitConfig, FitMode, PolynomialBasis};
use crate::error::{BasisError, NodeArray};
use faer::{Mat, linalg::solvers::Solve};
use ndarray::{ArrayD, ArrayView1};

/// Assemble V[i,j] = φ_j(x_i) for every basis function of `basis`.
///
/// # Errors
/// Errors of `evaluate_basis` are returned unchanged; a column whose shape
/// differs from `x` yields [`BasisError::ShapeMismatch`].
pub fn generalized_vandermonde<B>(basis: &B, x: &[f64]) -> Result<Mat<f64>, B::Error>
where
    B: PolynomialBasis + ?Sized,
{
    let columns = (0..basis.n_dofs())
        .map(|j| basis.evaluate_basis(j, ArrayView1::from(x).into_dyn()))
        .collect::<Result<Vec<_>, _>>()?;

    assemble(x.len(), columns)
}

/// Column-parallel [`generalized_vandermonde`].
#[cfg(feature = "parallel")]
pub fn generalized_vandermonde_parallel<B>(basis: &B, x: &[f64]) -> Result<Mat<f64>, B::Error>
where
    B: PolynomialBasis + Sync + ?Sized,
    B::Error: Send,
{
    use rayon::prelude::*;

    let columns = (0..basis.n_dofs())
        .into_par_iter()
        .map(|j| basis.evaluate_basis(j, ArrayView1::from(x).into_dyn()))
        .collect::<Result<Vec<_>, _>>()?;

    assemble(x.len(), columns)
}

fn assemble<E: From<BasisError>>(m: usize, columns: Vec<ArrayD<f64>>) -> Result<Mat<f64>, E> {
    let mut v = Mat::zeros(m, columns.len());

    for (j, column) in columns.iter().enumerate() {
        if column.shape() != &[m] {
            return Err(BasisError::ShapeMismatch {
                expected: vec![m],
                actual: column.shape().to_vec(),
            }
            .into());
        }
        for (i, &value) in column.iter().enumerate() {
            v[(i, j)] = value;
        }
    }

    Ok(v)
}

/// Solve the fit system for `y` given a generalized Vandermonde matrix `v`.
///
/// `v` must be m × n with m == n for [`FitMode::Interpolate`] and m >= n for
/// [`FitMode::LeastSquares`]; callers are expected to have validated the node
/// counts (see [`fit_nodes`]).
///
/// # Errors
/// [`BasisError::SingularSystem`] when `v` does not have full column rank,
/// which is checked before solving, or when the solution is not finite.
pub fn solve_fit(v: &Mat<f64>, y: &[f64], config: &FitConfig) -> Result<Vec<f64>, BasisError> {
    let (m, n) = (v.nrows(), v.ncols());
    if y.len() != m {
        return Err(BasisError::LengthMismatch {
            x_nodes: m,
            y_nodes: y.len(),
        });
    }

    let (lhs, rhs) = match config.mode {
        FitMode::Interpolate => {
            if m != n {
                return Err(BasisError::NodeCount {
                    expected: n,
                    actual: m,
                });
            }
            let mut rhs = Mat::zeros(m, 1);
            for (i, &yi) in y.iter().enumerate() {
                rhs[(i, 0)] = yi;
            }
            (v.clone(), rhs)
        }
        FitMode::LeastSquares => {
            if m < n {
                return Err(BasisError::Underdetermined {
                    n_nodes: m,
                    n_dofs: n,
                });
            }
            normal_equations(v, y)
        }
    };

    if is_rank_deficient(v) {
        return Err(BasisError::SingularSystem);
    }

    let lu = lhs.as_ref().full_piv_lu();
    let sol = lu.solve(&rhs);

    let coefficients: Vec<f64> = (0..n).map(|j| sol[(j, 0)]).collect();
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(BasisError::SingularSystem);
    }

    if config.mode == FitMode::Interpolate {
        let residual = max_residual(v, &coefficients, y);
        let scale = y.iter().fold(1.0_f64, |acc, yi| acc.max(yi.abs()));
        if residual > config.residual_tolerance * scale {
            log::warn!(
                "Ill-conditioned interpolation: max residual {:.3e} exceeds tolerance {:.3e} ({} nodes)",
                residual,
                config.residual_tolerance * scale,
                m
            );
        }
    }

    Ok(coefficients)
}

/// Whether the m × n matrix `v` (m >= n) has numerical rank below n.
///
/// Columns are scaled to unit max-norm first, so a basis whose functions
/// differ widely in magnitude (x^12 next to 1 on [0, 5]) is judged by the
/// independence of its columns only. Rank deficiency is a smallest pivot
/// below n·ε times the largest.
fn is_rank_deficient(v: &Mat<f64>) -> bool {
    let (m, n) = (v.nrows(), v.ncols());
    let mut scaled = v.clone();

    for j in 0..n {
        let norm = (0..m).fold(0.0_f64, |acc, i| acc.max(v[(i, j)].abs()));
        if norm == 0.0 {
            return true;
        }
        for i in 0..m {
            scaled[(i, j)] /= norm;
        }
    }

    let lu = scaled.as_ref().full_piv_lu();
    let u = lu.U();
    let (min_pivot, max_pivot) = (0..n).fold((f64::INFINITY, 0.0_f64), |(lo, hi), k| {
        let p = u[(k, k)].abs();
        (lo.min(p), hi.max(p))
    });

    min_pivot <= n as f64 * f64::EPSILON * max_pivot
}

/// Form V^T V and V^T y.
fn normal_equations(v: &Mat<f64>, y: &[f64]) -> (Mat<f64>, Mat<f64>) {
    let (m, n) = (v.nrows(), v.ncols());
    let mut vtv = Mat::zeros(n, n);
    let mut vty = Mat::zeros(n, 1);

    for j in 0..n {
        for k in j..n {
            let mut sum = 0.0;
            for i in 0..m {
                sum += v[(i, j)] * v[(i, k)];
            }
            vtv[(j, k)] = sum;
            vtv[(k, j)] = sum;
        }

        let mut sum = 0.0;
        for i in 0..m {
            sum += v[(i, j)] * y[i];
        }
        vty[(j, 0)] = sum;
    }

    (vtv, vty)
}

fn max_residual(v: &Mat<f64>, coefficients: &[f64], y: &[f64]) -> f64 {
    (0..v.nrows())
        .map(|i| {
            let p: f64 = coefficients
                .iter()
                .enumerate()
                .map(|(j, c)| v[(i, j)] * c)
                .sum();
            (p - y[i]).abs()
        })
        .fold(0.0, f64::max)
}

/// Validate nodal data against `n_dofs` and `config`.
///
/// Checks, in order: equal lengths, finiteness, node count for the fit mode,
/// and the number of distinct node locations.
pub(crate) fn validate_nodes(
    x_nodes: &[f64],
    y_nodes: &[f64],
    n_dofs: usize,
    config: &FitConfig,
) -> Result<(), BasisError> {
    if x_nodes.len() != y_nodes.len() {
        return Err(BasisError::LengthMismatch {
            x_nodes: x_nodes.len(),
            y_nodes: y_nodes.len(),
        });
    }

    for (array, values) in [(NodeArray::Locations, x_nodes), (NodeArray::Values, y_nodes)] {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(BasisError::NonFinite { array, index });
        }
    }

    let n_nodes = x_nodes.len();
    match config.mode {
        FitMode::Interpolate if n_nodes != n_dofs => {
            return Err(BasisError::NodeCount {
                expected: n_dofs,
                actual: n_nodes,
            });
        }
        FitMode::LeastSquares if n_nodes < n_dofs => {
            return Err(BasisError::Underdetermined { n_nodes, n_dofs });
        }
        _ => {}
    }

    let distinct = count_distinct(x_nodes);
    if distinct < n_dofs {
        return Err(BasisError::DegenerateNodes {
            distinct,
            required: n_dofs,
        });
    }

    Ok(())
}

/// Number of distinct values; inputs are finite.
pub(crate) fn count_distinct(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// Fit `basis` to nodal data: validation, Vandermonde assembly and solve.
///
/// This is the serial `fit` of the concrete bases in this crate and may be
/// used as-is by external bases.
pub fn fit_nodes<B>(
    basis: &B,
    x_nodes: &[f64],
    y_nodes: &[f64],
    config: &FitConfig,
) -> Result<Vec<f64>, B::Error>
where
    B: PolynomialBasis + ?Sized,
{
    validate_for_fit(basis, x_nodes, y_nodes, config)?;
    let v = generalized_vandermonde(basis, x_nodes)?;
    Ok(solve_fit(&v, y_nodes, config)?)
}

/// [`fit_nodes`] with the columns of V evaluated in parallel.
#[cfg(feature = "parallel")]
pub fn fit_nodes_parallel<B>(
    basis: &B,
    x_nodes: &[f64],
    y_nodes: &[f64],
    config: &FitConfig,
) -> Result<Vec<f64>, B::Error>
where
    B: PolynomialBasis + Sync + ?Sized,
    B::Error: Send,
{
    validate_for_fit(basis, x_nodes, y_nodes, config)?;
    let v = generalized_vandermonde_parallel(basis, x_nodes)?;
    Ok(solve_fit(&v, y_nodes, config)?)
}

/// The `fit` of the concrete bases: parallel assembly when the `parallel`
/// feature is enabled.
pub(crate) fn fit_concrete<B>(
    basis: &B,
    x_nodes: &[f64],
    y_nodes: &[f64],
    config: &FitConfig,
) -> Result<Vec<f64>, BasisError>
where
    B: PolynomialBasis<Error = BasisError> + Sync,
{
    #[cfg(feature = "parallel")]
    let coefficients = fit_nodes_parallel(basis, x_nodes, y_nodes, config);
    #[cfg(not(feature = "parallel"))]
    let coefficients = fit_nodes(basis, x_nodes, y_nodes, config);

    coefficients
}

fn validate_for_fit<B>(
    basis: &B,
    x_nodes: &[f64],
    y_nodes: &[f64],
    config: &FitConfig,
) -> Result<(), BasisError>
where
    B: PolynomialBasis + ?Sized,
{
    let n_dofs = basis.n_dofs();
    validate_nodes(x_nodes, y_nodes, n_dofs, config)?;

    log::debug!(
        "Fitting {} coefficients from {} nodes ({:?})",
        n_dofs,
        x_nodes.len(),
        config.mode
    );
    Ok(())
}
