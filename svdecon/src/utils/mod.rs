//! Utility functions for checking decompositions

pub mod norms;
pub mod validation;

pub use norms::{norm_frobenius, norm_max};
pub use validation::{
    has_nan, is_nan_sentinel, orthogonality_error, reconstruction_error, validate_svd,
};
