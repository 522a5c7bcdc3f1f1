//! Greedy intensity segmentation with per-segment binarization.
//!
//! Pixels are visited in row-major order. Each one joins the first existing
//! segment (in creation order) whose anchor value is within `threshold`, or
//! opens a new segment anchored at its own value. Anchors never move. The
//! output paints every member of a segment white if the anchor is at least
//! 128, black otherwise, so two pixels with the same value can end up in
//! different colors depending on which segment claimed them first.
//!
//! The scan is sequential by nature: a pixel's segment depends on every
//! anchor created before it.

use ndarray::{Array2, ArrayView2};

use crate::{Error, Result};

/// Anchors at or above this value paint their segment white.
const WHITE_CUTOFF: f32 = 128.0;

/// A segment as seen by the scan: its anchor and member count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub anchor: f32,
    pub members: usize,
}

impl Segment {
    fn color(&self) -> f32 {
        if self.anchor < WHITE_CUTOFF {
            0.0
        } else {
            255.0
        }
    }
}

/// Cluster `input` and return the segment index of every pixel plus the
/// segments in creation order.
///
/// Cost is O(pixels × segments). Anchors are pairwise at least `threshold`
/// apart, which bounds the segment count for 0-255 input.
pub fn cluster(input: ArrayView2<f32>, threshold: f32) -> (Array2<usize>, Vec<Segment>) {
    let mut labels = Array2::<usize>::zeros(input.dim());
    let mut segments: Vec<Segment> = Vec::new();

    for ((y, x), &pixel) in input.indexed_iter() {
        let found = segments
            .iter()
            .position(|s| (pixel - s.anchor).abs() < threshold);

        let index = match found {
            Some(i) => {
                segments[i].members += 1;
                i
            }
            None => {
                segments.push(Segment {
                    anchor: pixel,
                    members: 1,
                });
                segments.len() - 1
            }
        };
        labels[[y, x]] = index;
    }

    (labels, segments)
}

/// Segment and binarize.
///
/// # Errors
/// `EmptyInput` if the matrix has no pixels.
pub fn segment(input: ArrayView2<f32>, threshold: f32) -> Result<Array2<f32>> {
    if input.is_empty() {
        return Err(Error::EmptyInput("cannot segment an empty image"));
    }

    let (labels, segments) = cluster(input, threshold);
    tracing::trace!(segments = segments.len(), "segmentation finished");

    Ok(labels.mapv(|i| segments[i].color()))
}
