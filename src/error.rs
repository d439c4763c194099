//! Error type for basis evaluation and fitting.

use std::fmt;
use thiserror::Error;

/// Which input of a fit a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeArray {
    /// Node locations (`x_nodes`, or the nodes of a nodal basis).
    Locations,
    /// Target values (`y_nodes`).
    Values,
}

impl fmt::Display for NodeArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeArray::Locations => write!(f, "node locations"),
            NodeArray::Values => write!(f, "target values"),
        }
    }
}

/// Errors raised by basis evaluation and fitting.
///
/// Most variants describe a malformed argument and are rejected before any
/// arithmetic happens; [`BasisError::is_invalid_argument`] separates them from
/// the numerical failures of a fit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BasisError {
    /// Coefficient vector length differs from the number of degrees of freedom.
    #[error("Expected {expected} coefficients, got {actual}")]
    CoefficientCount { expected: usize, actual: usize },

    /// Basis function index outside `[0, n_dofs)`.
    #[error("Basis index {index} out of range for {n_dofs} basis functions")]
    IndexOutOfRange { index: usize, n_dofs: usize },

    /// A basis function returned an array whose shape differs from the points.
    #[error("Basis evaluation returned shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Node locations and target values have different lengths.
    #[error("Got {x_nodes} node locations but {y_nodes} target values")]
    LengthMismatch { x_nodes: usize, y_nodes: usize },

    /// Interpolation needs exactly one node per degree of freedom.
    #[error("Interpolation needs {expected} nodes, got {actual}")]
    NodeCount { expected: usize, actual: usize },

    /// Least-squares fit with fewer nodes than degrees of freedom.
    #[error("Underdetermined fit: {n_nodes} nodes for {n_dofs} degrees of freedom")]
    Underdetermined { n_nodes: usize, n_dofs: usize },

    /// A nodal basis was built from an empty node set.
    #[error("Node set is empty")]
    EmptyNodes,

    /// NaN or infinity at position `index` of `array`.
    #[error("Non-finite value in {array} at position {index}")]
    NonFinite { array: NodeArray, index: usize },

    /// Too few distinct node locations to determine the coefficients.
    #[error("Only {distinct} distinct nodes, at least {required} required")]
    DegenerateNodes { distinct: usize, required: usize },

    /// The fit system could not be solved.
    #[error("Fit system is singular")]
    SingularSystem,
}

impl BasisError {
    /// Whether this error rejects a caller-supplied argument, as opposed to a
    /// numerical failure of the fit.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            BasisError::DegenerateNodes { .. } | BasisError::SingularSystem
        )
    }
}
