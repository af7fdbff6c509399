//! C API for svdecon
//!
//! This crate exposes the economy SVD to hosts that hand over raw,
//! column-major `double` buffers (managed runtimes via P/Invoke, C, Fortran, ...).
//!
//! Two conventions are supported:
//! - `svdecon_svd_econ`: returns nothing; a failed decomposition is signalled by
//!   filling every output element with NaN.
//! - `svdecon_*` functions returning a [`StatusCode`]: inputs are validated first
//!   and the outcome is reported through the code (solver failure still NaN-fills).

mod svd;
mod utils;

pub use svd::*;

/// Error codes for C API
pub type StatusCode = libc::c_int;

pub const SVDECON_SUCCESS: StatusCode = 0;
pub const SVDECON_NOT_CONVERGED: StatusCode = -1;
pub const SVDECON_INVALID_DIMENSION: StatusCode = -2;
pub const SVDECON_INVALID_ARGUMENT: StatusCode = -3;
pub const SVDECON_INTERNAL_ERROR: StatusCode = -4;
