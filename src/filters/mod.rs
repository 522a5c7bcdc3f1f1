//! Filter modules operating on single-channel intensity matrices.
//!
//! ## Matrix Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Gray | (H, W) | f32 | Luminance, nominally 0-255, not clamped between filters |
//!
//! Only [`grayscale`] accepts multi-channel input; it produces the matrix the
//! other filters consume.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Value semantics** - take an `ArrayView2`, return a new `Array2`
//! - **Fail before computing** - dimension and argument checks run first
//! - **Shape changes are explicit** - blur and contour shrink, rotate swaps,
//!   concat grows; everything else keeps (H, W)
//!
//! ## Filter Categories
//!
//! - **Conversion**: grayscale
//! - **Geometry**: rotate, flip_horizontal, concat
//! - **Smoothing**: blur, median
//! - **Edges**: contour, edge_extraction
//! - **Noise**: salt_pepper
//! - **Segmentation**: segment

pub mod grayscale;
pub mod blur;
pub mod contour;
pub mod rotate;
pub mod concat;
pub mod noise;
pub mod segment;
pub mod edge;
