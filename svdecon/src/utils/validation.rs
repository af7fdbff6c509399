//! Result validation utilities

use nalgebra::{DMatrix, RealField};

use super::norms::{norm_frobenius, norm_max};
use crate::svd::EconSvd;
use crate::view::MatrixView;

/// Relative residual `‖A - U·diag(s)·Vᵀ‖_F / ‖A‖_F`
///
/// Falls back to the absolute residual when `A` is the zero matrix.
pub fn reconstruction_error<T: RealField + Copy>(original: &MatrixView<'_, T>, svd: &EconSvd<T>) -> T {
    let a = original.as_matrix();
    let residual = norm_frobenius(&(svd.reconstruct() - a));
    let scale = norm_frobenius(&a);
    if scale > T::zero() {
        residual / scale
    } else {
        residual
    }
}

/// Largest entry of `|QᵀQ - I|`; zero for orthonormal columns
pub fn orthogonality_error<T: RealField + Copy>(q: &DMatrix<T>) -> T {
    let k = q.ncols();
    let gram = q.transpose() * q;
    norm_max(&(gram - DMatrix::<T>::identity(k, k)))
}

/// Validate an economy SVD against the matrix it was computed from
///
/// Checks shapes, orthonormality of U and V, that singular values are
/// non-negative and descending, and the relative reconstruction error.
pub fn validate_svd<T: RealField + Copy>(
    original: &MatrixView<'_, T>,
    svd: &EconSvd<T>,
    tolerance: T,
) -> bool {
    let shape = original.shape();
    if svd.u.shape() != shape.u_shape()
        || svd.v.shape() != shape.v_shape()
        || svd.s.len() != shape.sigma_len()
    {
        return false;
    }

    if orthogonality_error(&svd.u) > tolerance || orthogonality_error(&svd.v) > tolerance {
        return false;
    }

    if svd.s.iter().any(|&x| x < -tolerance) {
        return false;
    }
    if svd.s.as_slice().windows(2).any(|w| w[0] < w[1] - tolerance) {
        return false;
    }

    reconstruction_error(original, svd) <= tolerance
}

/// True if any element is NaN
pub fn has_nan(buf: &[f64]) -> bool {
    buf.iter().any(|x| x.is_nan())
}

/// True if every element of all three buffers is NaN (the failure sentinel)
pub fn is_nan_sentinel(u: &[f64], sigma: &[f64], v: &[f64]) -> bool {
    u.iter().chain(sigma).chain(v).all(|x| x.is_nan())
}
