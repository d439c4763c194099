//! Fitting configuration shared by the concrete bases.

/// How `fit` treats the number of nodes it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Exactly one node per degree of freedom; the expansion passes through
    /// every node.
    #[default]
    Interpolate,
    /// At least one node per degree of freedom; minimizes the sum of squared
    /// residuals at the nodes.
    LeastSquares,
}

/// Configuration for fitting coefficients from nodal data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    /// Node-count policy.
    pub mode: FitMode,
    /// Relative residual above which an interpolating fit is reported as
    /// ill-conditioned. Scaled by `max(1, max |y|)`.
    pub residual_tolerance: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::interpolation()
    }
}

impl FitConfig {
    /// Exact interpolation with a residual tolerance of 1e-8.
    pub fn interpolation() -> Self {
        Self {
            mode: FitMode::Interpolate,
            residual_tolerance: 1e-8,
        }
    }

    /// Least-squares regression over any number of nodes >= n_dofs.
    pub fn least_squares() -> Self {
        Self {
            mode: FitMode::LeastSquares,
            ..Self::interpolation()
        }
    }

    /// Set the node-count policy.
    pub fn with_mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the residual tolerance.
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }
}
