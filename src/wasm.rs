//! WebAssembly exports for the filter engine.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Matrices cross
//! the boundary as a [`GrayBuffer`]: a flat row-major `f32` array plus its
//! width and height, since most filters change the dimensions.

use ndarray::{Array2, Array3};
use wasm_bindgen::prelude::*;

use crate::filters::grayscale::rgb8_to_gray;
use crate::{Directive, FilterConfig, MatrixFilterEngine};

/// Luminance matrix handed to and from JavaScript.
#[wasm_bindgen]
pub struct GrayBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

#[wasm_bindgen]
impl GrayBuffer {
    /// # Arguments
    /// * `data` - Flat array of luminance values (length = width * height)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Result<GrayBuffer, JsError> {
        if data.len() != width * height {
            return Err(JsError::new(&format!(
                "expected {} values for {width}x{height}, got {}",
                width * height,
                data.len()
            )));
        }
        Ok(GrayBuffer { width, height, data })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Copy of the flat row-major values.
    pub fn data(&self) -> Vec<f32> {
        self.data.clone()
    }

    /// Parse a bot caption ("rotate 2", "median", ...) and apply it.
    ///
    /// Noise filters draw from a generator seeded with `seed`.
    pub fn apply(&mut self, caption: &str, seed: u64) -> Result<(), JsError> {
        let directive = Directive::parse(caption)?;
        let data = std::mem::take(&mut self.data);
        let matrix = Array2::from_shape_vec((self.height, self.width), data)?;

        let config = FilterConfig {
            seed: Some(seed),
            ..FilterConfig::default()
        };
        let mut engine = MatrixFilterEngine::with_config(matrix, config);
        let outcome = engine.apply(&directive);

        let result = engine.into_inner();
        let (height, width) = result.dim();
        self.height = height;
        self.width = width;
        self.data = result.iter().copied().collect();

        outcome.map_err(JsError::from)
    }
}

/// Convert RGBA u8 pixels to a luminance buffer.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
#[wasm_bindgen]
pub fn grayscale_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<GrayBuffer, JsError> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())?;
    let gray = rgb8_to_gray(input.view())?;
    Ok(GrayBuffer {
        width,
        height,
        data: gray.iter().copied().collect(),
    })
}
