//! Utility functions for C API
//!
//! Dimension conversion and status mapping shared by the entry points.

use svdecon::{EconShape, SvdError};

use crate::{
    StatusCode, SVDECON_INTERNAL_ERROR, SVDECON_INVALID_ARGUMENT, SVDECON_INVALID_DIMENSION,
    SVDECON_NOT_CONVERGED,
};

/// Convert C dimensions into a checked shape
pub(crate) fn shape_from_c(n: u64, m: u64) -> Result<EconShape, StatusCode> {
    let rows = usize::try_from(n).map_err(|_| SVDECON_INVALID_DIMENSION)?;
    let cols = usize::try_from(m).map_err(|_| SVDECON_INVALID_DIMENSION)?;
    EconShape::new(rows, cols).map_err(|e| {
        log::debug!("rejected dimensions {}x{}: {}", n, m, e);
        SVDECON_INVALID_DIMENSION
    })
}

/// Map a library error onto a status code
pub(crate) fn status_from_error(err: &SvdError) -> StatusCode {
    match err {
        SvdError::NonConvergence => SVDECON_NOT_CONVERGED,
        SvdError::RankOutOfRange { .. } => SVDECON_INVALID_ARGUMENT,
        SvdError::InvalidInput(_) => SVDECON_INTERNAL_ERROR,
    }
}

/// Interpret the `epsilon` argument: non-positive or NaN selects the default
pub(crate) fn epsilon_from_c(epsilon: f64) -> Option<f64> {
    (epsilon > 0.0 && epsilon.is_finite()).then_some(epsilon)
}

/// Interpret the `max_iterations` argument: negative selects the default, 0 is unbounded
pub(crate) fn max_iterations_from_c(max_iterations: i64) -> Option<usize> {
    if max_iterations < 0 {
        None
    } else {
        Some(usize::try_from(max_iterations).unwrap_or(usize::MAX))
    }
}
