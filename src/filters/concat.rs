//! Side-by-side and stacked concatenation of two matrices.

use std::fmt;
use std::str::FromStr;

use ndarray::{concatenate, Array2, ArrayView2, Axis};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Rows are extended: `self[i] ++ other[i]`. Heights must match.
    #[default]
    Horizontal,
    /// Rows are appended: `self.rows ++ other.rows`. Widths must match.
    Vertical,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            other => Err(Error::InvalidArgument {
                name: "direction",
                value: other.to_string(),
                reason: "expected 'horizontal' or 'vertical'".into(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => f.write_str("horizontal"),
            Direction::Vertical => f.write_str("vertical"),
        }
    }
}

/// Join `other` onto `image`.
///
/// # Errors
/// `Dimension` when heights differ (horizontal) or widths differ (vertical).
/// Nothing is padded or cropped.
pub fn concat(
    image: ArrayView2<f32>,
    other: ArrayView2<f32>,
    direction: Direction,
) -> Result<Array2<f32>> {
    let (h, w) = image.dim();
    let (oh, ow) = other.dim();

    let axis = match direction {
        Direction::Horizontal => {
            if h != oh {
                return Err(Error::Dimension(format!(
                    "images have different heights ({h} vs {oh}) and cannot be concatenated horizontally"
                )));
            }
            Axis(1)
        }
        Direction::Vertical => {
            if w != ow {
                return Err(Error::Dimension(format!(
                    "images have different widths ({w} vs {ow}) and cannot be concatenated vertically"
                )));
            }
            Axis(0)
        }
    };

    concatenate(axis, &[image.view(), other.view()]).map_err(|e| Error::Dimension(e.to_string()))
}

/// Parse `direction` and concatenate; unknown directions are an
/// `InvalidArgument` error.
pub fn concat_str(
    image: ArrayView2<f32>,
    other: ArrayView2<f32>,
    direction: &str,
) -> Result<Array2<f32>> {
    concat(image, other, direction.parse()?)
}
