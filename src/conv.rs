use ndarray::{s, Array2};

use crate::error::{CnnError, Result};
use crate::tensor::Tensor;

/// Sliding-window cross-correlation of a 2-D image against a 2-D kernel
/// (no kernel flip), with symmetric zero padding.
///
/// Output dimensions follow `floor((d - k + 2 * padding) / stride) + 1` per
/// axis. Fails with [`CnnError::InvalidOutputShape`] when the kernel exceeds
/// the padded image on either axis, or when `stride` is zero.
///
/// Reference behavior is a direct nested-loop product-sum over each window;
/// correctness, not speed, is the contract.
pub fn convolve(image: &Tensor, kernel: &Tensor, stride: usize, padding: usize) -> Result<Tensor> {
    let image = image.view_2d()?;
    let kernel = kernel.view_2d()?;
    let (image_h, image_w) = image.dim();
    let (kernel_h, kernel_w) = kernel.dim();

    let padded_h = image_h + 2 * padding;
    let padded_w = image_w + 2 * padding;
    if stride == 0 || kernel_h > padded_h || kernel_w > padded_w || kernel_h == 0 || kernel_w == 0 {
        return Err(CnnError::InvalidOutputShape {
            input: vec![image_h, image_w],
            window_h: kernel_h,
            window_w: kernel_w,
            stride,
            padding,
        });
    }
    let output_h = (padded_h - kernel_h) / stride + 1;
    let output_w = (padded_w - kernel_w) / stride + 1;

    // Zero-fill border, not edge replication.
    let mut padded = Array2::<f32>::zeros((padded_h, padded_w));
    padded
        .slice_mut(s![padding..padding + image_h, padding..padding + image_w])
        .assign(&image);

    let mut output = Array2::<f32>::zeros((output_h, output_w));
    for y in 0..output_h {
        for x in 0..output_w {
            let window = padded.slice(s![
                y * stride..y * stride + kernel_h,
                x * stride..x * stride + kernel_w
            ]);
            output[[y, x]] = window
                .iter()
                .zip(kernel.iter())
                .map(|(a, b)| a * b)
                .sum();
        }
    }

    Ok(Tensor::from(output))
}
