use num_traits::{One, Zero};
use rand::Rng;

use crate::numeric::Numeric;

/// Generate a value stream with roughly `1 + sparsity_factor` zero entries per
/// non-zero entry. Useful for exercising the sparse paths with realistic gaps.
pub fn generate_sparse_values<T, R>(count: usize, sparsity_factor: u32, rng: &mut R) -> Vec<T>
where
    T: Numeric,
    R: Rng,
{
    (0..count)
        .map(|_| {
            if rng.gen_range(0..2 + sparsity_factor) == 0 {
                T::one()
            } else {
                T::zero()
            }
        })
        .collect()
}

/// Generate a fully dense random f64 stream in [-1, 1).
pub fn generate_random_values<R: Rng>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
