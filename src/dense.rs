use ndarray::Array1;

use crate::error::{CnnError, Result};
use crate::tensor::Tensor;

/// Reinterprets a 2-D tensor as a 1-D tensor of length `height * width`,
/// row-major (all columns of row 0, then row 1, ...). Pure shape change, no
/// numeric change. Fails with [`CnnError::EmptyInput`] on a zero-element
/// tensor, which the downstream dense stage cannot consume.
pub fn flatten(x: &Tensor) -> Result<Tensor> {
    let x = x.view_2d()?;
    if x.is_empty() {
        return Err(CnnError::EmptyInput("flatten"));
    }
    let flat: Array1<f32> = x.iter().copied().collect();
    Ok(Tensor::from(flat))
}

/// Affine transform `weights · x + bias` for a 1-D input of length `n`,
/// weights of shape `(m, n)` and bias of length `m`.
pub fn dense(x: &Tensor, weights: &Tensor, bias: &Tensor) -> Result<Tensor> {
    let x = x.view_1d()?;
    let weights = weights.view_2d()?;
    let bias = bias.view_1d()?;

    let (rows, cols) = weights.dim();
    if cols != x.len() {
        return Err(CnnError::ShapeMismatch {
            expected: format!("input of length {cols} for weights ({rows}, {cols})"),
            actual: format!("input of length {}", x.len()),
        });
    }
    if bias.len() != rows {
        return Err(CnnError::ShapeMismatch {
            expected: format!("bias of length {rows} for weights ({rows}, {cols})"),
            actual: format!("bias of length {}", bias.len()),
        });
    }

    Ok(Tensor::from(weights.dot(&x) + &bias))
}
