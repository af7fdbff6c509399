//! Economy SVD on top of nalgebra
//!
//! The decomposition itself is nalgebra's implicit-shift bidiagonal QR
//! (`SVD::try_new`). This module only adapts shapes and reports failure.

use nalgebra::linalg::SVD;
use nalgebra::{DMatrix, DVector, RealField};

use crate::shape::EconShape;
use crate::view::{MatrixView, OutputBuffers};

/// Error types for the economy SVD
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SvdError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("SVD did not converge")]
    NonConvergence,
    #[error("Rank {rank} out of range 1..={max}")]
    RankOutOfRange { rank: usize, max: usize },
}

/// Solver configuration
///
/// Both fields default to `None`, meaning:
/// - `epsilon`: machine epsilon of the scalar type
/// - `max_iterations`: `6·k²` QR sweeps, the bound LAPACK's `dbdsqr` uses
///
/// `Some(0)` iterations lets the solver run until it converges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvdConfig {
    pub epsilon: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl SvdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Iteration budget for a decomposition with shared dimension `k`
    pub fn iteration_budget(&self, k: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| 6usize.saturating_mul(k).saturating_mul(k).max(1))
    }
}

/// Result of an economy SVD: `A ≈ U · diag(s) · Vᵀ`
#[derive(Debug, Clone, PartialEq)]
pub struct EconSvd<T: RealField> {
    /// Left singular vectors (rows × k)
    pub u: DMatrix<T>,
    /// Singular values (k), non-negative and descending
    pub s: DVector<T>,
    /// Right singular vectors (cols × k), not transposed
    pub v: DMatrix<T>,
}

impl<T: RealField + Copy> EconSvd<T> {
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.v.nrows()
    }

    /// k = min(rows, cols)
    pub fn rank_limit(&self) -> usize {
        self.s.len()
    }

    /// Copy U, Σ and V verbatim (column-major) into caller-owned buffers
    ///
    /// # Errors
    /// `SvdError::InvalidInput` if the buffers were sized for another shape.
    /// Nothing is written in that case.
    pub fn write_into(&self, out: &mut OutputBuffers<'_, T>) -> Result<(), SvdError> {
        let shape = out.shape();
        if shape.u_shape() != self.u.shape() || shape.v_shape() != self.v.shape() {
            return Err(SvdError::InvalidInput(format!(
                "output buffers sized for {}x{}, decomposition is of a {}x{} matrix",
                shape.rows(),
                shape.cols(),
                self.nrows(),
                self.ncols()
            )));
        }
        out.copy_from(self.u.as_slice(), self.s.as_slice(), self.v.as_slice());
        Ok(())
    }

    /// U · diag(s) · Vᵀ
    pub fn reconstruct(&self) -> DMatrix<T> {
        &self.u * DMatrix::from_diagonal(&self.s) * self.v.transpose()
    }
}

/// Compute the economy SVD of a borrowed matrix
///
/// For an `n × m` input with `k = min(n, m)` this returns U (`n × k`),
/// the `k` singular values and V (`m × k`).
///
/// Input containing NaN or infinity is reported as `NonConvergence`
/// without running the solver.
///
/// # Example
/// ```
/// use svdecon::{MatrixView, SvdConfig, svd_econ};
///
/// let data: [f64; 4] = [3.0, 0.0, 0.0, 2.0];
/// let view = MatrixView::from_column_major(&data, 2, 2).unwrap();
/// let svd = svd_econ(&view, &SvdConfig::default()).unwrap();
/// assert_eq!(svd.s.len(), 2);
/// assert!((svd.s[0] - 3.0).abs() < 1e-12);
/// ```
pub fn svd_econ<T>(matrix: &MatrixView<'_, T>, config: &SvdConfig) -> Result<EconSvd<T>, SvdError>
where
    T: RealField + Copy,
{
    let shape: EconShape = matrix.shape();
    let k = shape.shared_dim();
    log::trace!("svd_econ: {}x{} (k = {})", shape.rows(), shape.cols(), k);

    if !matrix.is_finite() {
        log::debug!("svd_econ: input contains non-finite values");
        return Err(SvdError::NonConvergence);
    }

    let eps: T = match config.epsilon {
        Some(eps) => nalgebra::convert(eps),
        None => T::default_epsilon(),
    };
    let max_niter = config.iteration_budget(k);

    // The solver consumes its input, so it gets a private copy and the
    // caller's buffer is never written.
    let svd = SVD::try_new(matrix.as_matrix().clone_owned(), true, true, eps, max_niter)
        .ok_or_else(|| {
            log::debug!("svd_econ: no convergence within {} iterations", max_niter);
            SvdError::NonConvergence
        })?;

    let u = svd.u.ok_or(SvdError::NonConvergence)?;
    let v_t = svd.v_t.ok_or(SvdError::NonConvergence)?;

    Ok(EconSvd {
        u,
        s: svd.singular_values,
        v: v_t.transpose(),
    })
}
