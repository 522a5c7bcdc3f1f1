//! polybot image processing engine
//!
//! Grayscale pixel-matrix filters behind the image bot, with Python bindings
//! via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Decoded images enter as (height, width, channels) RGB or RGBA arrays and are
//! reduced to a single (height, width) `f32` luminance matrix, nominally 0-255.
//! Every filter after that works on the luminance matrix only.
//!
//! ## Filter Architecture
//! Filters are pure functions from a matrix view to a new matrix and may change
//! the dimensions (blur and contour shrink, rotate swaps, concat grows).
//! [`MatrixFilterEngine`] owns a matrix and applies filters one after another,
//! committing a result only when the filter succeeded.

pub mod batch;
pub mod codec;
pub mod config;
pub mod directive;
pub mod engine;
pub mod error;
pub mod filters;
pub mod logging;
pub mod matrix;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::FilterConfig;
pub use directive::Directive;
pub use engine::MatrixFilterEngine;
pub use error::{Error, Result};
pub use matrix::GrayMatrix;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::{PyIOError, PyValueError};
    use pyo3::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::filters::concat::Direction;
    use crate::filters::noise::SaltPepperParams;
    use crate::filters::{blur as blur_mod, concat as concat_mod, contour as contour_mod};
    use crate::filters::{edge, grayscale as grayscale_mod, noise};
    use crate::filters::{rotate as rotate_mod, segment as segment_mod};
    use crate::{Directive, Error, FilterConfig, MatrixFilterEngine};

    impl From<Error> for PyErr {
        fn from(err: Error) -> PyErr {
            match err {
                Error::Io(_) | Error::Image(_) => PyIOError::new_err(err.to_string()),
                other => PyValueError::new_err(other.to_string()),
            }
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    // ========================================================================
    // Grayscale Conversion
    // ========================================================================

    /// Convert an (H, W, 3|4) RGB(A) float image to an (H, W) luminance matrix.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let result = grayscale_mod::rgb_to_gray(image.as_array())?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Shrinking box blur; each pass removes `kernel_size - 1` rows and columns.
    #[pyfunction]
    #[pyo3(signature = (image, kernel_size=10, iterations=1))]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        kernel_size: usize,
        iterations: usize,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let result = blur_mod::box_blur(image.as_array(), kernel_size, iterations)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    pub fn contour<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
    ) -> Bound<'py, PyArray2<f32>> {
        contour_mod::contour(image.as_array()).into_pyarray(py)
    }

    /// Rotate clockwise by `times` quarter turns.
    #[pyfunction]
    #[pyo3(signature = (image, times=1))]
    pub fn rotate<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        times: i64,
    ) -> Bound<'py, PyArray2<f32>> {
        rotate_mod::rotate(image.as_array(), times).into_pyarray(py)
    }

    #[pyfunction]
    #[pyo3(signature = (image, salt_prob=0.01, pepper_prob=0.01, iterations=1, seed=None))]
    pub fn salt_and_pepper<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        salt_prob: f32,
        pepper_prob: f32,
        iterations: usize,
        seed: Option<u64>,
    ) -> Bound<'py, PyArray2<f32>> {
        let params = SaltPepperParams {
            salt_prob,
            pepper_prob,
            iterations,
        };
        let result = noise::salt_pepper(image.as_array(), params, &mut make_rng(seed));
        result.into_pyarray(py)
    }

    /// Concatenate `other` onto `image`; direction is "horizontal" or "vertical".
    #[pyfunction]
    #[pyo3(signature = (image, other, direction="horizontal"))]
    pub fn concat<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        other: PyReadonlyArray2<'py, f32>,
        direction: &str,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let direction: Direction = direction.parse()?;
        let result = concat_mod::concat(image.as_array(), other.as_array(), direction)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    #[pyo3(signature = (image, threshold=10.0))]
    pub fn segment<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        threshold: f32,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let result = segment_mod::segment(image.as_array(), threshold)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    #[pyo3(signature = (image, intensity=3.0))]
    pub fn median<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        intensity: f32,
    ) -> Bound<'py, PyArray2<f32>> {
        noise::median(image.as_array(), intensity).into_pyarray(py)
    }

    #[pyfunction]
    #[pyo3(signature = (image, intensity=1.0))]
    pub fn edge_extraction<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        intensity: f32,
    ) -> Bound<'py, PyArray2<f32>> {
        edge::edge_extraction(image.as_array(), intensity).into_pyarray(py)
    }

    // ========================================================================
    // Dispatcher
    // ========================================================================

    /// Parse a bot caption and apply it with default parameters.
    #[pyfunction]
    #[pyo3(signature = (image, caption, seed=None))]
    pub fn apply_directive<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, f32>,
        caption: &str,
        seed: Option<u64>,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let directive = Directive::parse(caption)?;
        let config = FilterConfig {
            seed,
            ..FilterConfig::default()
        };
        let mut engine = MatrixFilterEngine::with_config(image.as_array().to_owned(), config);
        engine.apply(&directive)?;
        Ok(engine.into_inner().into_pyarray(py))
    }

    /// polybot image processing extension module
    #[pymodule]
    pub fn polybot_imgproc(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;

        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(contour, m)?)?;
        m.add_function(wrap_pyfunction!(rotate, m)?)?;
        m.add_function(wrap_pyfunction!(salt_and_pepper, m)?)?;
        m.add_function(wrap_pyfunction!(concat, m)?)?;
        m.add_function(wrap_pyfunction!(segment, m)?)?;
        m.add_function(wrap_pyfunction!(median, m)?)?;
        m.add_function(wrap_pyfunction!(edge_extraction, m)?)?;

        m.add_function(wrap_pyfunction!(apply_directive, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::polybot_imgproc;
