//! Shrinking box blur.
//!
//! Each pass replaces the matrix with the floored mean of every `k×k` window
//! whose top-left corner lies inside the matrix, so a pass shrinks both
//! dimensions by `k - 1`. There is no border handling: windows that would
//! hang off the edge are simply not produced.

use ndarray::{s, Array2, ArrayView2};

use crate::{Error, Result};

/// One shrink-and-average pass.
fn box_blur_pass(input: ArrayView2<f32>, kernel_size: usize) -> Array2<f32> {
    let (height, width) = input.dim();
    let (out_h, out_w) = (height - kernel_size + 1, width - kernel_size + 1);
    let area = (kernel_size * kernel_size) as f64;

    let mut output = Array2::<f32>::zeros((out_h, out_w));
    for y in 0..out_h {
        for x in 0..out_w {
            let window = input.slice(s![y..y + kernel_size, x..x + kernel_size]);
            let sum: f64 = window.iter().map(|&v| v as f64).sum();
            output[[y, x]] = (sum / area).floor() as f32;
        }
    }

    output
}

/// Apply the box blur `iterations` times.
///
/// # Arguments
/// * `input` - Intensity matrix (height, width)
/// * `kernel_size` - Window edge length `k` (bot default 10)
/// * `iterations` - Number of passes (bot default 1)
///
/// # Returns
/// Matrix of shape `(H - n(k-1), W - n(k-1))` after `n` passes.
///
/// # Errors
/// `InvalidArgument` for `k == 0`; `Dimension` if any pass finds `k` at least
/// as large as the current height or width. Validation happens up front, so
/// nothing is computed for a request that would fail.
pub fn box_blur(
    input: ArrayView2<f32>,
    kernel_size: usize,
    iterations: usize,
) -> Result<Array2<f32>> {
    if kernel_size == 0 {
        return Err(Error::InvalidArgument {
            name: "kernel_size",
            value: kernel_size.to_string(),
            reason: "blur kernel must be at least 1x1".into(),
        });
    }

    let (mut height, mut width) = input.dim();
    for pass in 0..iterations {
        if kernel_size >= height || kernel_size >= width {
            return Err(Error::Dimension(format!(
                "blur pass {} of {iterations}: kernel {kernel_size} does not fit a {height}x{width} matrix",
                pass + 1
            )));
        }
        height -= kernel_size - 1;
        width -= kernel_size - 1;
    }

    let mut current = input.to_owned();
    for _ in 0..iterations {
        current = box_blur_pass(current.view(), kernel_size);
    }

    Ok(current)
}
