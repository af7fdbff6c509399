//! Common test utilities

use crate::svd::EconSvd;
use crate::utils::{orthogonality_error, reconstruction_error};
use crate::view::MatrixView;

/// Simple deterministic pseudo-random number generator (LCG)
///
/// Uses the common parameters: a = 1664525, c = 1013904223 (from Numerical Recipes)
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        ((self.state >> 16) as f64) / ((1u64 << 48) as f64)
    }
}

/// Column-major `rows × cols` matrix with entries uniform in [-1, 1)
pub fn test_matrix(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    (0..rows * cols).map(|_| 2.0 * rng.next_f64() - 1.0).collect()
}

/// Check reconstruction and orthogonality of an f64 decomposition
pub fn assert_valid_svd(view: &MatrixView<'_, f64>, svd: &EconSvd<f64>, tol: f64) {
    let residual = reconstruction_error(view, svd);
    assert!(residual <= tol, "relative residual {} > {}", residual, tol);

    let u_err = orthogonality_error(&svd.u);
    assert!(u_err <= tol, "U not orthonormal: {}", u_err);
    let v_err = orthogonality_error(&svd.v);
    assert!(v_err <= tol, "V not orthonormal: {}", v_err);
}
