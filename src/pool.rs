use ndarray::{s, Array2};

use crate::error::{CnnError, Result};
use crate::tensor::Tensor;

/// Sliding-window max reduction over a 2-D feature map. No padding.
///
/// Output dimensions follow `floor((d - size) / stride) + 1` per axis. Fails
/// with [`CnnError::InvalidOutputShape`] when the window exceeds the input on
/// either axis, or when `stride` is zero. Ties within a window resolve to the
/// maximum value itself; which cell attained it is not observable.
pub fn max_pool(feature_map: &Tensor, size: usize, stride: usize) -> Result<Tensor> {
    let map = feature_map.view_2d()?;
    let (input_h, input_w) = map.dim();

    if stride == 0 || size == 0 || size > input_h || size > input_w {
        return Err(CnnError::InvalidOutputShape {
            input: vec![input_h, input_w],
            window_h: size,
            window_w: size,
            stride,
            padding: 0,
        });
    }
    let output_h = (input_h - size) / stride + 1;
    let output_w = (input_w - size) / stride + 1;

    let mut output = Array2::<f32>::zeros((output_h, output_w));
    for y in 0..output_h {
        for x in 0..output_w {
            let window = map.slice(s![
                y * stride..y * stride + size,
                x * stride..x * stride + size
            ]);
            output[[y, x]] = window.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        }
    }

    Ok(Tensor::from(output))
}
