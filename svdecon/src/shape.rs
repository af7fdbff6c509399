//! Shape arithmetic for the economy decomposition
//!
//! For an `rows × cols` input with `k = min(rows, cols)`:
//! - U is `rows × k`
//! - Σ has `k` entries
//! - V is `cols × k`

use crate::svd::SvdError;

/// Dimensions of an input matrix together with the derived output sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconShape {
    rows: usize,
    cols: usize,
}

impl EconShape {
    /// Create a shape, rejecting empty matrices and sizes whose element count overflows
    pub fn new(rows: usize, cols: usize) -> Result<Self, SvdError> {
        if rows == 0 || cols == 0 {
            return Err(SvdError::InvalidInput(format!(
                "matrix dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }

        let shape = Self { rows, cols };
        let k = shape.shared_dim();
        // Every buffer we hand out must be addressable as a slice
        let fits = |a: usize, b: usize| {
            a.checked_mul(b)
                .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        };
        if !fits(rows, cols) || !fits(rows, k) || !fits(k, cols) {
            return Err(SvdError::InvalidInput(format!(
                "matrix dimensions {}x{} overflow the address space",
                rows, cols
            )));
        }

        Ok(shape)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// k = min(rows, cols)
    pub fn shared_dim(&self) -> usize {
        self.rows.min(self.cols)
    }

    /// Number of elements in the input matrix
    pub fn matrix_len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn u_len(&self) -> usize {
        self.rows * self.shared_dim()
    }

    pub fn sigma_len(&self) -> usize {
        self.shared_dim()
    }

    pub fn v_len(&self) -> usize {
        self.shared_dim() * self.cols
    }

    /// (rows, k)
    pub fn u_shape(&self) -> (usize, usize) {
        (self.rows, self.shared_dim())
    }

    /// (cols, k)
    pub fn v_shape(&self) -> (usize, usize) {
        (self.cols, self.shared_dim())
    }
}
