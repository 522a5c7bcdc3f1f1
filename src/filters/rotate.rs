//! Quarter-turn rotation and mirroring.
//!
//! All rotations are clockwise (CW):
//! - 90° CW: (x, y) -> (H - 1 - y, x)
//!
//! Larger turns are repeated quarter turns, so `rotate(m, 4)` returns the data
//! unchanged and negative counts wrap around (`-1` is three quarter turns).

use ndarray::{Array2, ArrayView2};

/// Rotate a matrix 90 degrees clockwise.
///
/// # Returns
/// Rotated matrix (W, H) - note dimensions are swapped
pub fn rotate_90_cw(image: ArrayView2<f32>) -> Array2<f32> {
    let (h, w) = image.dim();
    let mut result = Array2::<f32>::zeros((w, h));

    for y in 0..h {
        for x in 0..w {
            let new_y = x;
            let new_x = h - 1 - y;
            result[[new_y, new_x]] = image[[y, x]];
        }
    }

    result
}

/// Rotate by `times` quarter turns clockwise.
pub fn rotate(image: ArrayView2<f32>, times: i64) -> Array2<f32> {
    let turns = times.rem_euclid(4);

    let mut result = image.to_owned();
    for _ in 0..turns {
        result = rotate_90_cw(result.view());
    }

    result
}

/// Flip horizontally (mirror left-right); same dimensions.
pub fn flip_horizontal(image: ArrayView2<f32>) -> Array2<f32> {
    let (h, w) = image.dim();
    let mut result = Array2::<f32>::zeros((h, w));

    for y in 0..h {
        for x in 0..w {
            result[[y, w - 1 - x]] = image[[y, x]];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn make_test_image(h: usize, w: usize) -> Array2<f32> {
        Array2::from_shape_fn((h, w), |(y, x)| (y * w + x) as f32)
    }

    #[test]
    fn test_rotate_90_cw_2x2() {
        let img = array![[1.0f32, 2.0], [3.0, 4.0]];
        assert_eq!(rotate(img.view(), 1), array![[3.0f32, 1.0], [4.0, 2.0]]);
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let img = make_test_image(2, 5);
        assert_eq!(rotate(img.view(), 1).dim(), (5, 2));
        assert_eq!(rotate(img.view(), 2).dim(), (2, 5));
        assert_eq!(rotate(img.view(), 3).dim(), (5, 2));
    }

    #[test]
    fn test_rotate_non_square_values() {
        // [[0, 1, 2],
        //  [3, 4, 5]]  -> CW ->  [[3, 0], [4, 1], [5, 2]]
        let img = make_test_image(2, 3);
        assert_eq!(
            rotate_90_cw(img.view()),
            array![[3.0f32, 0.0], [4.0, 1.0], [5.0, 2.0]]
        );
    }

    #[test]
    fn test_rotate_360_identity() {
        let img = make_test_image(4, 4);
        assert_eq!(rotate(img.view(), 4), img);

        let mut step = img.clone();
        for _ in 0..4 {
            step = rotate(step.view(), 1);
        }
        assert_eq!(step, img);
    }

    #[test]
    fn test_rotate_zero_is_noop() {
        let img = make_test_image(3, 2);
        assert_eq!(rotate(img.view(), 0), img);
        assert_eq!(rotate(img.view(), 8), img);
    }

    #[test]
    fn test_rotate_negative_wraps() {
        let img = make_test_image(3, 5);
        assert_eq!(rotate(img.view(), -1), rotate(img.view(), 3));
        assert_eq!(rotate(img.view(), -2), rotate(img.view(), 2));
    }

    #[test]
    fn test_flip_horizontal() {
        let img = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(
            flip_horizontal(img.view()),
            array![[3.0f32, 2.0, 1.0], [6.0, 5.0, 4.0]]
        );
    }

    #[test]
    fn test_flip_twice_identity() {
        let img = make_test_image(3, 4);
        let twice = flip_horizontal(flip_horizontal(img.view()).view());
        assert_eq!(twice, img);
    }
}
