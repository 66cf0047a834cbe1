use ndarray::{ArrayD, IxDyn};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::tensor::Tensor;

/// Produces parameter tensors for a model under construction.
///
/// The model never generates parameters itself; callers inject whatever
/// strategy they want (a RNG, a checkpoint loader, a test fixture).
pub trait Initializer {
    fn tensor(&mut self, shape: &[usize]) -> Tensor;
}

impl<F> Initializer for F
where
    F: FnMut(&[usize]) -> Tensor,
{
    fn tensor(&mut self, shape: &[usize]) -> Tensor {
        self(shape)
    }
}

/// Standard-normal parameter initializer.
pub struct NormalInit {
    rng: StdRng,
}

impl NormalInit {
    /// Entropy-seeded initializer.
    pub fn new() -> Self {
        NormalInit {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic initializer for reproducible parameters.
    pub fn seeded(seed: u64) -> Self {
        NormalInit {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NormalInit {
    fn default() -> Self {
        Self::new()
    }
}

impl Initializer for NormalInit {
    fn tensor(&mut self, shape: &[usize]) -> Tensor {
        let data: ArrayD<f32> = ArrayD::random_using(IxDyn(shape), StandardNormal, &mut self.rng);
        Tensor::from(data)
    }
}
