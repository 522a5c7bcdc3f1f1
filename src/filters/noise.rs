//! Noise filters: Salt & Pepper, Median.
//!
//! Salt & pepper draws from a caller-supplied random source so results are
//! reproducible under a seeded generator. The median filter is the bot's
//! "median" effect: a 3×3 median scaled by an intensity factor.

use ndarray::{Array2, ArrayView2};
use rand::Rng;

// ============================================================================
// Salt & Pepper
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltPepperParams {
    /// Probability a pixel becomes 255.
    pub salt_prob: f32,
    /// Probability a pixel becomes 0.
    pub pepper_prob: f32,
    pub iterations: usize,
}

impl Default for SaltPepperParams {
    fn default() -> Self {
        Self {
            salt_prob: 0.01,
            pepper_prob: 0.01,
            iterations: 1,
        }
    }
}

/// Corrupt pixels with salt (255) and pepper (0).
///
/// For every pass and every pixel one uniform value `v` in [0, 1) is drawn:
/// `v < salt` gives salt, else `v < salt + pepper` gives pepper, else the pixel
/// is kept. Passes compound. A probability sum above 1 corrupts every pixel.
///
/// # Arguments
/// * `input` - Intensity matrix (height, width)
/// * `params` - Probabilities and pass count
/// * `rng` - Random source; pass a seeded `StdRng` for deterministic output
pub fn salt_pepper<R: Rng + ?Sized>(
    input: ArrayView2<f32>,
    params: SaltPepperParams,
    rng: &mut R,
) -> Array2<f32> {
    let mut output = input.to_owned();
    let pepper_limit = params.salt_prob + params.pepper_prob;

    for _ in 0..params.iterations {
        for v in output.iter_mut() {
            let draw: f32 = rng.gen();
            if draw < params.salt_prob {
                *v = 255.0;
            } else if draw < pepper_limit {
                *v = 0.0;
            }
        }
    }

    output
}

// ============================================================================
// Median Filter
// ============================================================================

/// Apply the scaled 3×3 median filter.
///
/// The window is clipped at the borders (corners see 4 pixels, edges 6), with
/// no padding or wraparound. After sorting, the element at `len / 2` is taken,
/// multiplied by `intensity` and clamped to 0-255. With the default intensity
/// of 3 most mid-gray pixels saturate to white.
pub fn median(input: ArrayView2<f32>, intensity: f32) -> Array2<f32> {
    let (height, width) = input.dim();
    let mut output = Array2::<f32>::zeros((height, width));
    let mut values: Vec<f32> = Vec::with_capacity(9);

    for y in 0..height {
        for x in 0..width {
            values.clear();
            for sy in y.saturating_sub(1)..(y + 2).min(height) {
                for sx in x.saturating_sub(1)..(x + 2).min(width) {
                    values.push(input[[sy, sx]]);
                }
            }

            values.sort_by(|a, b| a.total_cmp(b));
            let median_value = values[values.len() / 2];
            output[[y, x]] = (median_value * intensity).clamp(0.0, 255.0);
        }
    }

    output
}
