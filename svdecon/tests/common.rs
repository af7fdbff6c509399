//! Common test utilities

#![allow(dead_code)]

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
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    (0..rows * cols).map(|_| 2.0 * rng.next_f64() - 1.0).collect()
}

/// Column-major Hilbert matrix H[i, j] = 1 / (i + j + 1)
pub fn hilbert_matrix(n: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            data.push(1.0 / (i + j + 1) as f64);
        }
    }
    data
}
