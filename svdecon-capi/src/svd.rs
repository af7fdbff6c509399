//! Economy SVD entry points
//!
//! All buffers are column-major and owned by the caller. For an `n × m`
//! input and `k = min(n, m)` the outputs hold:
//! - `u`: `n·k` elements (n × k)
//! - `sigma`: `k` elements, descending
//! - `v`: `k·m` elements (m × k, not transposed)
//!
//! Results are computed in private storage first, so the outputs receive
//! either the complete decomposition or the complete NaN sentinel.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::slice;

use svdecon::{EconShape, MatrixView, OutputBuffers, SvdConfig, svd_econ, truncated_svd};

use crate::utils::{epsilon_from_c, max_iterations_from_c, shape_from_c, status_from_error};
use crate::{
    SVDECON_INTERNAL_ERROR, SVDECON_INVALID_ARGUMENT, SVDECON_SUCCESS, StatusCode,
};

/// Decompose into caller buffers and NaN-fill them on any failure
///
/// # Safety
/// Pointers must be non-null, valid for the lengths implied by `shape`, and
/// the output regions must not overlap each other or the input.
unsafe fn svd_econ_into(
    matrix: *const f64,
    shape: EconShape,
    config: &SvdConfig,
    u: *mut f64,
    sigma: *mut f64,
    v: *mut f64,
) -> StatusCode {
    let (data, u, sigma, v) = unsafe {
        (
            slice::from_raw_parts(matrix, shape.matrix_len()),
            slice::from_raw_parts_mut(u, shape.u_len()),
            slice::from_raw_parts_mut(sigma, shape.sigma_len()),
            slice::from_raw_parts_mut(v, shape.v_len()),
        )
    };
    let mut out = match OutputBuffers::new(shape, u, sigma, v) {
        Ok(out) => out,
        Err(_) => return SVDECON_INTERNAL_ERROR,
    };

    // Catch panics to prevent unwinding across FFI boundary
    let result = catch_unwind(AssertUnwindSafe(|| {
        let view = MatrixView::from_column_major(data, shape.rows(), shape.cols())?;
        svd_econ(&view, config)
    }));

    let err = match result {
        Ok(Ok(svd)) => match svd.write_into(&mut out) {
            Ok(()) => return SVDECON_SUCCESS,
            Err(e) => status_from_error(&e),
        },
        Ok(Err(e)) => status_from_error(&e),
        Err(_) => {
            log::error!("svd_econ panicked on a {}x{} input", shape.rows(), shape.cols());
            SVDECON_INTERNAL_ERROR
        }
    };
    out.fill_nan();
    err
}

/// Economy SVD with the NaN-fill failure convention
///
/// Computes `matrix ≈ U · diag(sigma) · Vᵀ` for an `n × m` column-major matrix.
/// Returns nothing: when the decomposition fails (non-convergence, non-finite
/// input), all `n·k` elements of `u`, `k` of `sigma` and `k·m` of `v` are set
/// to quiet NaN, so the caller detects failure by testing the outputs for NaN.
///
/// # Arguments
/// * `matrix` - Input matrix (`n·m` elements, column-major), read only
/// * `n` - Number of rows
/// * `m` - Number of columns
/// * `u` - Output, `n·k` elements
/// * `sigma` - Output, `k` elements
/// * `v` - Output, `k·m` elements
///
/// # Safety
/// The caller must allocate every buffer with exactly the sizes above
/// (`k = min(n, m)`); anything else is undefined behavior. No reference to
/// any buffer is kept after return. A null pointer or a zero dimension makes
/// the call a no-op.
///
/// # Example (C)
/// ```c
/// double a[6] = {1, 2, 3, 4, 5, 6};   // 3x2
/// double u[6], s[2], v[4];
/// svdecon_svd_econ(a, 3, 2, u, s, v);
/// if (isnan(s[0])) { /* decomposition failed */ }
/// ```
#[unsafe(no_mangle)]
pub unsafe extern "C" fn svdecon_svd_econ(
    matrix: *const f64,
    n: u64,
    m: u64,
    u: *mut f64,
    sigma: *mut f64,
    v: *mut f64,
) {
    if matrix.is_null() || u.is_null() || sigma.is_null() || v.is_null() {
        return;
    }
    let Ok(shape) = shape_from_c(n, m) else {
        return;
    };
    unsafe { svd_econ_into(matrix, shape, &SvdConfig::default(), u, sigma, v) };
}

/// Economy SVD with input validation and a status code
///
/// Same buffers and layout as [`svdecon_svd_econ`].
///
/// # Returns
/// * `SVDECON_SUCCESS` (0) on success
/// * `SVDECON_NOT_CONVERGED` (-1) if the solver failed; outputs are NaN-filled
/// * `SVDECON_INVALID_DIMENSION` (-2) if `n` or `m` is zero or too large; outputs untouched
/// * `SVDECON_INVALID_ARGUMENT` (-3) if any pointer is null; outputs untouched
/// * `SVDECON_INTERNAL_ERROR` (-4) if an internal panic occurs; outputs are NaN-filled
///
/// # Safety
/// Non-null buffers must hold exactly `n·m`, `n·k`, `k`, `k·m` elements.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn svdecon_svd_econ_checked(
    matrix: *const f64,
    n: u64,
    m: u64,
    u: *mut f64,
    sigma: *mut f64,
    v: *mut f64,
) -> StatusCode {
    unsafe { svdecon_svd_econ_with_options(matrix, n, m, -1.0, -1, u, sigma, v) }
}

/// Economy SVD with explicit solver settings
///
/// # Arguments
/// * `epsilon` - Convergence tolerance; `<= 0` or NaN selects machine epsilon
/// * `max_iterations` - QR sweep budget; negative selects the default (`6·k²`),
///   0 lets the solver run until convergence
///
/// Other arguments, return codes and safety requirements are those of
/// [`svdecon_svd_econ_checked`].
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn svdecon_svd_econ_with_options(
    matrix: *const f64,
    n: u64,
    m: u64,
    epsilon: f64,
    max_iterations: i64,
    u: *mut f64,
    sigma: *mut f64,
    v: *mut f64,
) -> StatusCode {
    if matrix.is_null() || u.is_null() || sigma.is_null() || v.is_null() {
        return SVDECON_INVALID_ARGUMENT;
    }
    let shape = match shape_from_c(n, m) {
        Ok(shape) => shape,
        Err(status) => return status,
    };

    let config = SvdConfig {
        epsilon: epsilon_from_c(epsilon),
        max_iterations: max_iterations_from_c(max_iterations),
    };
    unsafe { svd_econ_into(matrix, shape, &config, u, sigma, v) }
}

/// Rank-`rank` truncated SVD: `matrix ≈ U · diag(w) · Vt`
///
/// # Arguments
/// * `matrix` - Input matrix (`n·m` elements, column-major)
/// * `rank` - Number of singular triplets to keep, `1 <= rank <= min(n, m)`
/// * `u` - Output, `n·rank` elements (n × rank)
/// * `w` - Output, `rank` leading singular values
/// * `vt` - Output, `rank·m` elements (rank × m, transposed right vectors)
///
/// # Returns
/// * `SVDECON_SUCCESS` (0) on success
/// * `SVDECON_NOT_CONVERGED` (-1) if the solver failed; outputs are NaN-filled
/// * `SVDECON_INVALID_DIMENSION` (-2) if `n` or `m` is zero or too large
/// * `SVDECON_INVALID_ARGUMENT` (-3) on a null pointer or `rank` out of range
/// * `SVDECON_INTERNAL_ERROR` (-4) if an internal panic occurs; outputs are NaN-filled
///
/// # Safety
/// Non-null buffers must hold exactly the element counts listed above.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn svdecon_truncated_svd(
    matrix: *const f64,
    n: u64,
    m: u64,
    rank: u64,
    u: *mut f64,
    w: *mut f64,
    vt: *mut f64,
) -> StatusCode {
    if matrix.is_null() || u.is_null() || w.is_null() || vt.is_null() {
        return SVDECON_INVALID_ARGUMENT;
    }
    let shape = match shape_from_c(n, m) {
        Ok(shape) => shape,
        Err(status) => return status,
    };
    let rank = match usize::try_from(rank) {
        Ok(r) if r >= 1 && r <= shape.shared_dim() => r,
        _ => {
            log::debug!("truncated_svd: rank {} outside 1..={}", rank, shape.shared_dim());
            return SVDECON_INVALID_ARGUMENT;
        }
    };

    let (data, u, w, vt) = unsafe {
        (
            slice::from_raw_parts(matrix, shape.matrix_len()),
            slice::from_raw_parts_mut(u, shape.rows() * rank),
            slice::from_raw_parts_mut(w, rank),
            slice::from_raw_parts_mut(vt, rank * shape.cols()),
        )
    };

    let result = catch_unwind(AssertUnwindSafe(|| {
        let view = MatrixView::from_column_major(data, shape.rows(), shape.cols())?;
        truncated_svd(&view, rank, &SvdConfig::default())
    }));

    let err = match result {
        Ok(Ok(tsvd)) => match tsvd.write_into(u, w, vt) {
            Ok(()) => return SVDECON_SUCCESS,
            Err(e) => status_from_error(&e),
        },
        Ok(Err(e)) => status_from_error(&e),
        Err(_) => {
            log::error!("truncated_svd panicked on a {}x{} input", shape.rows(), shape.cols());
            SVDECON_INTERNAL_ERROR
        }
    };
    u.fill(f64::NAN);
    w.fill(f64::NAN);
    vt.fill(f64::NAN);
    err
}

/// Shared dimension `k = min(n, m)`, for sizing the output buffers
#[unsafe(no_mangle)]
pub extern "C" fn svdecon_shared_dim(n: u64, m: u64) -> u64 {
    n.min(m)
}
