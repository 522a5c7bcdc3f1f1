//! Edge extraction with a fixed 3×3 Laplacian-style kernel.
//!
//! Only interior pixels are convolved. The outermost ring of the output is
//! left at zero, and inputs narrower or shorter than 3 pixels come back as an
//! all-zero matrix of the same size.

use ndarray::{Array2, ArrayView2};

/// 8-neighbour edge kernel
pub const EDGE_KERNEL: [[f32; 3]; 3] = [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]];

/// Apply edge extraction.
///
/// # Arguments
/// * `input` - Intensity matrix (height, width)
/// * `intensity` - Multiplier applied to the kernel response before clamping
///
/// # Returns
/// Matrix with the input's dimensions; interior cells hold
/// `clamp(response * intensity, 0, 255)`, border cells are 0.
pub fn edge_extraction(input: ArrayView2<f32>, intensity: f32) -> Array2<f32> {
    let (height, width) = input.dim();
    let mut output = Array2::<f32>::zeros((height, width));

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut total = 0.0f32;
            for (ky, row) in EDGE_KERNEL.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    total += input[[y + ky - 1, x + kx - 1]] * k;
                }
            }
            output[[y, x]] = (total * intensity).clamp(0.0, 255.0);
        }
    }

    output
}
