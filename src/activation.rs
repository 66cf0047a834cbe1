use ndarray::Array1;

use crate::error::{CnnError, Result};
use crate::tensor::Tensor;

/// Elementwise `max(0, x)`. Shape-preserving, total.
pub fn relu(x: &Tensor) -> Tensor {
    x.map(|v| v.max(0.0))
}

/// Normalizes a 1-D tensor into a probability distribution.
///
/// Subtracts the maximum before exponentiating so large logits do not
/// overflow. The result has the same length, all elements non-negative,
/// summing to 1 within floating-point tolerance.
pub fn softmax(x: &Tensor) -> Result<Tensor> {
    let x = x.view_1d()?;
    if x.is_empty() {
        return Err(CnnError::EmptyInput("softmax"));
    }
    let max = x.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exp: Array1<f32> = x.mapv(|v| (v - max).exp());
    let sum = exp.sum();
    Ok(Tensor::from(exp / sum))
}
