//! Grayscale conversion filter.
//!
//! Reduces an RGB(A) pixel array to the single luminance channel the rest of
//! the engine works on. Uses ITU-R BT.601 luma coefficients.
//!
//! ## Bit Depth Support
//!
//! - **f32**: Values 0-255 or 0.0-1.0, whatever the decoder produced. The
//!   weighted sum is not clamped or rescaled.
//! - **u8 (8-bit)**: Values 0-255, converted straight into an f32 matrix.

use ndarray::{Array2, ArrayView3};

use crate::{Error, Result};

/// ITU-R BT.601 luma coefficients
pub const LUMA_R: f32 = 0.2989;
pub const LUMA_G: f32 = 0.5870;
pub const LUMA_B: f32 = 0.1140;

fn check_channels(channels: usize) -> Result<()> {
    if channels < 3 {
        return Err(Error::Precondition(format!(
            "grayscale conversion needs at least 3 channels, got {channels}"
        )));
    }
    Ok(())
}

// ============================================================================
// Float (f32) Implementation
// ============================================================================

/// Convert an RGB or RGBA image to a luminance matrix.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, channels), channels >= 3.
///   Channels past the third (alpha) are ignored.
///
/// # Returns
/// (height, width) matrix of `0.2989 R + 0.5870 G + 0.1140 B`
pub fn rgb_to_gray(input: ArrayView3<f32>) -> Result<Array2<f32>> {
    let (height, width, channels) = input.dim();
    check_channels(channels)?;

    let mut output = Array2::<f32>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]];
            let g = input[[y, x, 1]];
            let b = input[[y, x, 2]];
            output[[y, x]] = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        }
    }

    Ok(output)
}

// ============================================================================
// 8-bit (u8) Implementation
// ============================================================================

/// Convert an 8-bit RGB or RGBA image to a luminance matrix in 0-255.
pub fn rgb8_to_gray(input: ArrayView3<u8>) -> Result<Array2<f32>> {
    let (height, width, channels) = input.dim();
    check_channels(channels)?;

    let mut output = Array2::<f32>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;
            output[[y, x]] = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    // ========================================================================
    // f32 Tests
    // ========================================================================

    #[test]
    fn test_gray_f32_red() {
        let mut img = Array3::<f32>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 255.0;

        let result = rgb_to_gray(img.view()).unwrap();

        assert_eq!(result.dim(), (1, 1));
        assert!((result[[0, 0]] - 0.2989 * 255.0).abs() < 0.001);
    }

    #[test]
    fn test_gray_f32_unit_range_white() {
        let img = Array3::<f32>::ones((2, 3, 3));

        let result = rgb_to_gray(img.view()).unwrap();

        // 0.2989 + 0.5870 + 0.1140 = 0.9999, no rescaling
        assert_eq!(result.dim(), (2, 3));
        assert!((result[[1, 2]] - 0.9999).abs() < 0.0001);
    }

    #[test]
    fn test_gray_f32_ignores_alpha() {
        let mut img = Array3::<f32>::zeros((1, 1, 4));
        img[[0, 0, 1]] = 100.0;
        img[[0, 0, 3]] = 255.0;

        let result = rgb_to_gray(img.view()).unwrap();
        assert!((result[[0, 0]] - 58.7).abs() < 0.001);
    }

    #[test]
    fn test_gray_rejects_single_channel() {
        let img = Array3::<f32>::zeros((2, 2, 1));
        assert!(matches!(rgb_to_gray(img.view()), Err(Error::Precondition(_))));
    }

    // ========================================================================
    // u8 Tests
    // ========================================================================

    #[test]
    fn test_gray_u8_matches_f32() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 200;
        img[[0, 0, 1]] = 100;
        img[[0, 0, 2]] = 50;

        let result_u8 = rgb8_to_gray(img.view()).unwrap();
        let result_f32 = rgb_to_gray(img.mapv(|v| v as f32).view()).unwrap();

        assert!((result_u8[[0, 0]] - result_f32[[0, 0]]).abs() < 0.0001);
    }

    #[test]
    fn test_gray_u8_black_is_zero() {
        let img = Array3::<u8>::zeros((3, 2, 3));
        let result = rgb8_to_gray(img.view()).unwrap();
        assert!(result.iter().all(|&v| v == 0.0));
    }
}
