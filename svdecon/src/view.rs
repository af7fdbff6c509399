//! Borrowed, fixed-shape views over caller-owned memory
//!
//! Neither type owns its data and neither offers a way to change its shape,
//! so memory handed in by a host runtime can never be reallocated or
//! relocated behind the caller's back.

use nalgebra::{DMatrixView, RealField, Scalar};

use crate::shape::EconShape;
use crate::svd::SvdError;

/// Read-only column-major matrix view
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T: Scalar> {
    data: &'a [T],
    shape: EconShape,
}

impl<'a, T: Scalar> MatrixView<'a, T> {
    /// Wrap `data` as a `rows × cols` column-major matrix without copying
    ///
    /// # Errors
    /// `SvdError::InvalidInput` if a dimension is zero or
    /// `data.len() != rows * cols`.
    pub fn from_column_major(data: &'a [T], rows: usize, cols: usize) -> Result<Self, SvdError> {
        let shape = EconShape::new(rows, cols)?;
        if data.len() != shape.matrix_len() {
            return Err(SvdError::InvalidInput(format!(
                "buffer holds {} elements, a {}x{} matrix needs {}",
                data.len(),
                rows,
                cols,
                shape.matrix_len()
            )));
        }
        Ok(Self { data, shape })
    }

    pub fn nrows(&self) -> usize {
        self.shape.rows()
    }

    pub fn ncols(&self) -> usize {
        self.shape.cols()
    }

    pub fn shape(&self) -> EconShape {
        self.shape
    }

    /// Element at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i >= self.nrows() || j >= self.ncols() {
            return None;
        }
        self.data.get(j * self.nrows() + i)
    }

    /// Underlying column-major storage
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Borrow the data as an nalgebra matrix view (still no copy)
    pub fn as_matrix(&self) -> DMatrixView<'a, T> {
        DMatrixView::from_slice(self.data, self.nrows(), self.ncols())
    }
}

impl<T: RealField + Copy> MatrixView<'_, T> {
    /// True if no element is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

/// Caller-owned destinations for U, Σ and V
///
/// Lengths are checked once against an [`EconShape`]; afterwards the buffers
/// are only ever filled in full.
#[derive(Debug)]
pub struct OutputBuffers<'a, T> {
    shape: EconShape,
    u: &'a mut [T],
    sigma: &'a mut [T],
    v: &'a mut [T],
}

impl<'a, T: Copy> OutputBuffers<'a, T> {
    /// # Errors
    /// `SvdError::InvalidInput` if any buffer length differs from
    /// `rows·k`, `k` or `k·cols` respectively.
    pub fn new(
        shape: EconShape,
        u: &'a mut [T],
        sigma: &'a mut [T],
        v: &'a mut [T],
    ) -> Result<Self, SvdError> {
        let expected = [
            ("U", u.len(), shape.u_len()),
            ("sigma", sigma.len(), shape.sigma_len()),
            ("V", v.len(), shape.v_len()),
        ];
        for (name, got, want) in expected {
            if got != want {
                return Err(SvdError::InvalidInput(format!(
                    "{} buffer holds {} elements, expected {}",
                    name, got, want
                )));
            }
        }
        Ok(Self { shape, u, sigma, v })
    }

    pub fn shape(&self) -> EconShape {
        self.shape
    }

    /// Overwrite every element of all three buffers
    pub fn fill(&mut self, value: T) {
        self.u.fill(value);
        self.sigma.fill(value);
        self.v.fill(value);
    }

    pub(crate) fn copy_from(&mut self, u: &[T], sigma: &[T], v: &[T]) {
        self.u.copy_from_slice(u);
        self.sigma.copy_from_slice(sigma);
        self.v.copy_from_slice(v);
    }

    pub fn u(&self) -> &[T] {
        self.u
    }

    pub fn sigma(&self) -> &[T] {
        self.sigma
    }

    pub fn v(&self) -> &[T] {
        self.v
    }
}

impl<T: RealField + Copy> OutputBuffers<'_, T> {
    /// Write the failure sentinel: quiet NaN everywhere
    pub fn fill_nan(&mut self) {
        self.fill(nalgebra::convert(f64::NAN));
    }
}
