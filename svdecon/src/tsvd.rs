//! Rank-r truncated SVD built from the economy decomposition
//!
//! Keeps the leading `r` singular triplets and returns the right factor
//! already transposed, so that `A ≈ U · diag(w) · Vt`.

use nalgebra::{DMatrix, DVector, RealField};

use crate::svd::{EconSvd, SvdConfig, SvdError, svd_econ};
use crate::view::MatrixView;

/// Result of a truncated SVD
#[derive(Debug, Clone, PartialEq)]
pub struct TruncatedSvd<T: RealField> {
    /// Left singular vectors (rows × rank)
    pub u: DMatrix<T>,
    /// Leading singular values (rank)
    pub w: DVector<T>,
    /// Transposed right singular vectors (rank × cols)
    pub vt: DMatrix<T>,
}

impl<T: RealField + Copy> TruncatedSvd<T> {
    pub fn rank(&self) -> usize {
        self.w.len()
    }

    /// Best rank-r approximation U · diag(w) · Vt
    pub fn reconstruct(&self) -> DMatrix<T> {
        &self.u * DMatrix::from_diagonal(&self.w) * &self.vt
    }

    /// Copy the factors (column-major) into caller-owned buffers
    ///
    /// # Errors
    /// `SvdError::InvalidInput` unless the buffers hold exactly
    /// `rows·rank`, `rank` and `rank·cols` elements. Nothing is written then.
    pub fn write_into(&self, u: &mut [T], w: &mut [T], vt: &mut [T]) -> Result<(), SvdError> {
        if u.len() != self.u.len() || w.len() != self.w.len() || vt.len() != self.vt.len() {
            return Err(SvdError::InvalidInput(format!(
                "truncated buffers hold ({}, {}, {}) elements, expected ({}, {}, {})",
                u.len(),
                w.len(),
                vt.len(),
                self.u.len(),
                self.w.len(),
                self.vt.len()
            )));
        }
        u.copy_from_slice(self.u.as_slice());
        w.copy_from_slice(self.w.as_slice());
        vt.copy_from_slice(self.vt.as_slice());
        Ok(())
    }
}

impl<T: RealField + Copy> EconSvd<T> {
    /// Keep the leading `rank` singular triplets
    ///
    /// # Errors
    /// `SvdError::RankOutOfRange` unless `1 <= rank <= k`.
    pub fn truncate(&self, rank: usize) -> Result<TruncatedSvd<T>, SvdError> {
        check_rank(rank, self.rank_limit())?;
        Ok(TruncatedSvd {
            u: self.u.columns(0, rank).into_owned(),
            w: self.s.rows(0, rank).into_owned(),
            vt: self.v.columns(0, rank).transpose(),
        })
    }
}

/// Economy SVD followed by truncation to `rank`
///
/// The rank is checked before the solver runs.
pub fn truncated_svd<T>(
    matrix: &MatrixView<'_, T>,
    rank: usize,
    config: &SvdConfig,
) -> Result<TruncatedSvd<T>, SvdError>
where
    T: RealField + Copy,
{
    check_rank(rank, matrix.shape().shared_dim())?;
    svd_econ(matrix, config)?.truncate(rank)
}

fn check_rank(rank: usize, max: usize) -> Result<(), SvdError> {
    if rank == 0 || rank > max {
        return Err(SvdError::RankOutOfRange { rank, max });
    }
    Ok(())
}
