//! The single-channel intensity matrix every filter consumes and produces.
//!
//! A `GrayMatrix` is an `(height, width)` array of `f32` intensities, nominally
//! 0-255. `Array2` is rectangular by construction, so the only place raggedness
//! can enter is [`from_rows`].

use ndarray::{Array2, ArrayView2};

use crate::{Error, Result};

pub type GrayMatrix = Array2<f32>;

/// Build a matrix from nested rows.
///
/// Fails with a precondition error if the rows have different lengths.
pub fn from_rows(rows: &[Vec<f32>]) -> Result<GrayMatrix> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(Error::Precondition(format!(
            "ragged matrix: row {i} has {} columns, expected {width}",
            row.len()
        )));
    }

    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((height, width), flat)
        .map_err(|e| Error::Precondition(format!("cannot shape matrix: {e}")))
}

/// Copy a matrix back out as nested rows.
pub fn to_rows(matrix: ArrayView2<f32>) -> Vec<Vec<f32>> {
    matrix.rows().into_iter().map(|r| r.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows_shape() {
        let m = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m[[1, 0]], 4.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn test_from_rows_empty() {
        let m = from_rows(&[]).unwrap();
        assert_eq!(m.dim(), (0, 0));
    }

    #[test]
    fn test_to_rows_preserves_order() {
        let m = array![[1.0f32, 2.0], [3.0, 4.0]];
        assert_eq!(to_rows(m.view()), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }
}
