//! Image file boundary: decode to an intensity matrix, encode it back.
//!
//! Decoding always goes through 8-bit RGB and the grayscale converter, so PNG
//! and JPEG input land in the same 0-255 range. Encoding stretches the
//! matrix's own min..max over the 256 gray levels, the way a gray colormap
//! save does; a constant matrix encodes as black.

use std::path::{Path, PathBuf};

use image::GrayImage;
use ndarray::{Array3, ArrayView2};

use crate::filters::grayscale::rgb8_to_gray;
use crate::matrix::GrayMatrix;
use crate::{Error, Result};

/// Open an image file and convert it to a luminance matrix.
pub fn decode_gray(path: &Path) -> Result<GrayMatrix> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::info!(path = %path.display(), width, height, "decoded image");

    let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
        .map_err(|e| Error::Precondition(format!("decoded buffer has unexpected shape: {e}")))?;
    rgb8_to_gray(pixels.view())
}

/// Map a matrix onto 8-bit gray levels with min-max normalization.
pub fn to_luma8(matrix: ArrayView2<f32>) -> Result<GrayImage> {
    let (height, width) = matrix.dim();
    if matrix.is_empty() {
        return Err(Error::Dimension(format!(
            "cannot encode a {height}x{width} image"
        )));
    }

    let (lo, hi) = matrix
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = hi - lo;

    let pixels: Vec<u8> = matrix
        .iter()
        .map(|&v| {
            if span > 0.0 {
                ((v - lo) / span * 256.0).floor().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        })
        .collect();

    GrayImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| Error::Precondition("pixel buffer does not match image size".into()))
}

/// Encode a matrix to `path`; the format follows the extension.
pub fn encode_gray(matrix: ArrayView2<f32>, path: &Path) -> Result<()> {
    let img = to_luma8(matrix)?;
    img.save(path)?;
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "encoded image"
    );
    Ok(())
}

/// `photos/cat.jpg` -> `photos/cat_filtered.jpg`
pub fn filtered_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let mut name = format!("{stem}_filtered");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

/// Encode next to `source` under its `_filtered` name and return that path.
pub fn save_filtered(matrix: ArrayView2<f32>, source: &Path) -> Result<PathBuf> {
    let target = filtered_path(source);
    encode_gray(matrix, &target)?;
    Ok(target)
}
