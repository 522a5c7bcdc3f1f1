//! Row-wise contour filter.
//!
//! Takes the absolute difference between horizontally adjacent pixels. Only
//! rows are differenced, never columns, so vertical intensity changes do not
//! show up. Every row loses its first column.

use ndarray::{Array2, ArrayView2};

/// Apply the horizontal contour filter.
///
/// # Returns
/// (height, width - 1) matrix where `out[y][x-1] = |in[y][x] - in[y][x-1]|`.
/// A zero-width input stays zero-width.
pub fn contour(input: ArrayView2<f32>) -> Array2<f32> {
    let (height, width) = input.dim();
    let out_w = width.saturating_sub(1);

    let mut output = Array2::<f32>::zeros((height, out_w));
    for y in 0..height {
        for x in 1..width {
            output[[y, x - 1]] = (input[[y, x]] - input[[y, x - 1]]).abs();
        }
    }

    output
}
