//! Matrix norm computations

use nalgebra::{ComplexField, Dim, Matrix, RawStorage, RealField};

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> T
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let sum = mat.iter().fold(T::zero(), |acc, &x| acc + x * x);
    ComplexField::sqrt(sum)
}

/// Compute the maximum absolute value in a matrix
pub fn norm_max<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> T
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    mat.iter()
        .fold(T::zero(), |acc, &x| RealField::max(acc, ComplexField::abs(x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::DMatrix;

    #[test]
    fn test_norm_frobenius() {
        let m = DMatrix::from_row_slice(2, 2, &[3.0, 4.0, 0.0, 5.0]);
        let norm = norm_frobenius(&m);
        assert_abs_diff_eq!(norm, (9.0f64 + 16.0 + 0.0 + 25.0).sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_norm_max() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, -3.0, 2.0, 0.5]);
        assert_abs_diff_eq!(norm_max(&m), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_norms_of_view() {
        let data = [1.0, 2.0, 2.0, 4.0];
        let view = nalgebra::DMatrixView::from_slice(&data, 2, 2);
        assert_abs_diff_eq!(norm_frobenius(&view), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_max(&view), 4.0, epsilon = 1e-12);
    }
}
