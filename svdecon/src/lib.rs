//! # svdecon: economy-size SVD over borrowed buffers
//!
//! Thin, safe layer over nalgebra's singular value decomposition for
//! column-major `f64` data owned by someone else (typically a managed host
//! runtime calling through `svdecon-capi`).
//!
//! The input is wrapped in a fixed-shape [`MatrixView`], the outputs are
//! checked against an [`EconShape`] and the result comes back as
//! `Result<EconSvd, SvdError>`. The NaN-fill failure convention used by
//! legacy callers lives only in the C API crate.

pub mod shape;
pub mod svd;
pub mod tsvd;
pub mod utils;
pub mod view;

pub use shape::EconShape;
pub use svd::{EconSvd, SvdConfig, SvdError, svd_econ};
pub use tsvd::{TruncatedSvd, truncated_svd};
pub use utils::{
    has_nan, is_nan_sentinel, norm_frobenius, norm_max, orthogonality_error,
    reconstruction_error, validate_svd,
};
pub use view::{MatrixView, OutputBuffers};

// Re-export nalgebra types used in the public API
pub use nalgebra::{DMatrix, DVector};

// Test utilities (only available in test mode)
#[cfg(test)]
pub(crate) mod test_utils;
