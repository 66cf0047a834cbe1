use crate::activation::{relu, softmax};
use crate::conv::convolve;
use crate::dense::{dense, flatten};
use crate::error::{CnnError, Result};
use crate::init::Initializer;
use crate::pool::max_pool;
use crate::tensor::Tensor;

/// Kernel side length in the reference configuration.
pub const KERNEL_SIZE: usize = 3;
/// Max-pool window and stride in the reference configuration.
pub const POOL_SIZE: usize = 2;
pub const POOL_STRIDE: usize = 2;
/// Output classes in the reference configuration.
pub const NUM_CLASSES: usize = 10;
/// Expected input side length in the reference configuration (28x28, after a
/// 3x3 valid convolution and 2x2 pooling this flattens to 13 * 13 = 169).
pub const INPUT_SIZE: usize = 28;

const FLAT_SIZE: usize = 13 * 13;

/// Parameter aggregate for the one-stage pipeline: a convolution kernel, a
/// dense weight matrix and its bias vector. Read-only for the lifetime of
/// inference; `forward` is a pure function of the parameters and the input.
#[derive(Debug, Clone)]
pub struct SimpleCnn {
    kernel: Tensor,
    weights: Tensor,
    bias: Tensor,
}

impl SimpleCnn {
    /// Builds a model from pre-existing parameter tensors, validating ranks
    /// and the weights/bias agreement. Arbitrary kernel and dense sizes are
    /// accepted; `forward` validates the per-stage shape chain.
    pub fn new(kernel: Tensor, weights: Tensor, bias: Tensor) -> Result<Self> {
        kernel.view_2d()?;
        let w = weights.view_2d()?;
        let b = bias.view_1d()?;
        if b.len() != w.nrows() {
            return Err(CnnError::ShapeMismatch {
                expected: format!("bias of length {} for weights {:?}", w.nrows(), weights.shape()),
                actual: format!("bias of length {}", b.len()),
            });
        }
        Ok(SimpleCnn {
            kernel,
            weights,
            bias,
        })
    }

    /// Builds the reference configuration (3x3 kernel, 10x169 weights,
    /// length-10 bias for 28x28 inputs), drawing every parameter from the
    /// injected initializer.
    pub fn with_initializer<I: Initializer>(init: &mut I) -> Result<Self> {
        SimpleCnn::new(
            init.tensor(&[KERNEL_SIZE, KERNEL_SIZE]),
            init.tensor(&[NUM_CLASSES, FLAT_SIZE]),
            init.tensor(&[NUM_CLASSES]),
        )
    }

    pub fn kernel(&self) -> &Tensor {
        &self.kernel
    }

    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    /// Runs one inference pass:
    ///
    /// `image → convolve → relu → max_pool(2, 2) → flatten → dense → softmax`
    ///
    /// Each stage validates its own shape preconditions; the first failure
    /// is returned without attempting subsequent stages. The output is a
    /// probability vector of length equal to the dense layer's output
    /// dimension.
    pub fn forward(&self, image: &Tensor) -> Result<Tensor> {
        let conv_out = convolve(image, &self.kernel, 1, 0)?;
        log::trace!("conv output shape {:?}", conv_out.shape());
        let activated = relu(&conv_out);
        let pooled = max_pool(&activated, POOL_SIZE, POOL_STRIDE)?;
        log::trace!("pool output shape {:?}", pooled.shape());
        let flat = flatten(&pooled)?;
        let logits = dense(&flat, &self.weights, &self.bias)?;
        softmax(&logits)
    }
}
