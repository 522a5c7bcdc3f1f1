//! The stateful front of the filter library.
//!
//! [`MatrixFilterEngine`] owns one intensity matrix and a random source. Each
//! method runs the matching pure filter on a view of the current matrix and
//! swaps the result in only if the filter succeeded, so an error leaves the
//! engine exactly as it was.

use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FilterConfig;
use crate::directive::Directive;
use crate::filters::concat::Direction;
use crate::filters::noise::SaltPepperParams;
use crate::filters::{blur, concat, contour, edge, noise, rotate, segment};
use crate::matrix::{self, GrayMatrix};
use crate::Result;

pub struct MatrixFilterEngine<R = StdRng> {
    data: GrayMatrix,
    rng: R,
    config: FilterConfig,
}

impl MatrixFilterEngine<StdRng> {
    /// Engine with default parameters and an entropy-seeded generator.
    pub fn new(data: GrayMatrix) -> Self {
        Self::with_config(data, FilterConfig::default())
    }

    /// Engine whose generator is seeded from `config.seed` when present.
    pub fn with_config(data: GrayMatrix, config: FilterConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { data, rng, config }
    }

    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        Ok(Self::new(matrix::from_rows(rows)?))
    }
}

impl<R: Rng> MatrixFilterEngine<R> {
    /// Engine drawing noise from the given random source.
    pub fn with_rng(data: GrayMatrix, config: FilterConfig, rng: R) -> Self {
        Self { data, rng, config }
    }

    pub fn data(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn into_inner(self) -> GrayMatrix {
        self.data
    }

    fn commit(&mut self, filter: &str, next: GrayMatrix) {
        tracing::debug!(filter, from = ?self.data.dim(), to = ?next.dim(), "filter applied");
        self.data = next;
    }

    pub fn blur(&mut self, kernel_size: usize, iterations: usize) -> Result<()> {
        let next = blur::box_blur(self.data.view(), kernel_size, iterations)?;
        self.commit("blur", next);
        Ok(())
    }

    pub fn contour(&mut self) -> Result<()> {
        let next = contour::contour(self.data.view());
        self.commit("contour", next);
        Ok(())
    }

    pub fn rotate(&mut self, times: i64) -> Result<()> {
        let next = rotate::rotate(self.data.view(), times);
        self.commit("rotate", next);
        Ok(())
    }

    pub fn salt_pepper(&mut self, params: SaltPepperParams) -> Result<()> {
        let next = noise::salt_pepper(self.data.view(), params, &mut self.rng);
        self.commit("salt_pepper", next);
        Ok(())
    }

    /// Join another image's matrix onto this one; `other` is only read.
    pub fn concat(&mut self, other: ArrayView2<f32>, direction: Direction) -> Result<()> {
        let next = concat::concat(self.data.view(), other, direction)?;
        self.commit("concat", next);
        Ok(())
    }

    /// Join the left-right mirror of the current image to its right side.
    pub fn concat_mirrored(&mut self) -> Result<()> {
        let mirrored = rotate::flip_horizontal(self.data.view());
        self.concat(mirrored.view(), Direction::Horizontal)
    }

    pub fn segment(&mut self) -> Result<()> {
        let next = segment::segment(self.data.view(), self.config.segment.threshold)?;
        self.commit("segment", next);
        Ok(())
    }

    pub fn median(&mut self, intensity: f32) -> Result<()> {
        let next = noise::median(self.data.view(), intensity);
        self.commit("median", next);
        Ok(())
    }

    pub fn edge_extraction(&mut self, intensity: f32) -> Result<()> {
        let next = edge::edge_extraction(self.data.view(), intensity);
        self.commit("edge_extraction", next);
        Ok(())
    }

    /// Run a parsed caption with the configured default parameters.
    pub fn apply(&mut self, directive: &Directive) -> Result<()> {
        match *directive {
            Directive::Blur => {
                let blur = &self.config.blur;
                let (kernel_size, iterations) = (blur.kernel_size, blur.iterations);
                self.blur(kernel_size, iterations)
            }
            Directive::Contour => self.contour(),
            Directive::Concat => self.concat_mirrored(),
            Directive::Segment => self.segment(),
            Directive::Rotate { times } => self.rotate(times),
            Directive::SaltAndPepper { iterations } => {
                let params = SaltPepperParams {
                    salt_prob: self.config.salt_pepper.salt_prob,
                    pepper_prob: self.config.salt_pepper.pepper_prob,
                    iterations,
                };
                self.salt_pepper(params)
            }
            Directive::Median => self.median(self.config.median.intensity),
            Directive::EdgeExtraction => self.edge_extraction(self.config.edge.intensity),
        }
    }

    /// Apply directives in order, stopping at the first failure.
    pub fn apply_all(&mut self, directives: &[Directive]) -> Result<()> {
        for directive in directives {
            self.apply(directive)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ndarray::{array, Array2};

    fn seeded(data: GrayMatrix) -> MatrixFilterEngine {
        let config = FilterConfig {
            seed: Some(11),
            ..FilterConfig::default()
        };
        MatrixFilterEngine::with_config(data, config)
    }

    #[test]
    fn test_engine_threads_filters_sequentially() {
        let mut engine = seeded(Array2::from_elem((12, 12), 100.0));

        engine.blur(3, 1).unwrap();
        assert_eq!(engine.dim(), (10, 10));
        engine.contour().unwrap();
        assert_eq!(engine.dim(), (10, 9));
        engine.rotate(1).unwrap();
        assert_eq!(engine.dim(), (9, 10));
        assert!(engine.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_failed_blur_leaves_matrix_untouched() {
        let original = Array2::from_shape_fn((4, 4), |(y, x)| (y * 4 + x) as f32);
        let mut engine = seeded(original.clone());

        let err = engine.blur(3, 2).unwrap_err();
        assert!(matches!(err, Error::Dimension(_)));
        assert_eq!(engine.data(), original.view());
    }

    #[test]
    fn test_failed_concat_leaves_matrix_untouched() {
        let original = array![[1.0f32, 2.0], [3.0, 4.0]];
        let other = array![[5.0f32, 6.0]];
        let mut engine = seeded(original.clone());

        assert!(engine.concat(other.view(), Direction::Horizontal).is_err());
        assert_eq!(engine.data(), original.view());

        engine.concat(other.view(), Direction::Vertical).unwrap();
        assert_eq!(engine.dim(), (3, 2));
    }

    #[test]
    fn test_failed_segment_on_empty() {
        let mut engine = seeded(Array2::zeros((0, 0)));
        assert!(matches!(engine.segment(), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_concat_mirrored_doubles_width() {
        let mut engine = seeded(array![[1.0f32, 2.0, 3.0]]);
        engine.apply(&Directive::Concat).unwrap();
        assert_eq!(engine.into_inner(), array![[1.0f32, 2.0, 3.0, 3.0, 2.0, 1.0]]);
    }

    #[test]
    fn test_apply_uses_config_defaults() {
        let img = Array2::from_elem((25, 30), 40.0);

        let mut engine = seeded(img.clone());
        engine.apply(&Directive::Blur).unwrap();
        assert_eq!(engine.dim(), (16, 21));

        let mut engine = seeded(img);
        engine.apply(&Directive::Median).unwrap();
        assert!(engine.data().iter().all(|&v| v == 120.0));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let img = Array2::from_elem((30, 30), 128.0);
        let mut a = seeded(img.clone());
        let mut b = seeded(img);

        let directive = Directive::SaltAndPepper { iterations: 3 };
        a.apply(&directive).unwrap();
        b.apply(&directive).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_with_rng_injects_source() {
        let img = Array2::from_elem((10, 10), 50.0);
        let mut engine =
            MatrixFilterEngine::with_rng(img, FilterConfig::default(), StdRng::seed_from_u64(5));
        engine
            .salt_pepper(SaltPepperParams {
                salt_prob: 1.0,
                pepper_prob: 0.0,
                iterations: 1,
            })
            .unwrap();
        assert!(engine.data().iter().all(|&v| v == 255.0));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            MatrixFilterEngine::from_rows(&rows),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn test_apply_all_stops_at_first_error() {
        let mut engine = seeded(Array2::from_elem((5, 5), 10.0));
        let directives = [Directive::Rotate { times: 1 }, Directive::Blur, Directive::Contour];

        assert!(engine.apply_all(&directives).is_err());
        // rotate committed, blur (k = 10) rejected, contour never ran
        assert_eq!(engine.dim(), (5, 5));
    }
}
