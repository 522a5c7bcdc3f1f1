//! Parallel processing of independent images.
//!
//! Each job gets its own engine, matrix and random source, so jobs share
//! nothing and run on the rayon pool without locking. Results come back in
//! job order.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::FilterConfig;
use crate::directive::Directive;
use crate::engine::MatrixFilterEngine;
use crate::matrix::GrayMatrix;
use crate::Result;

#[derive(Debug, Clone)]
pub struct BatchJob {
    pub image: GrayMatrix,
    pub directives: Vec<Directive>,
}

/// Run every job; one failing job does not affect the others.
///
/// With `config.seed = Some(s)`, job `i` is seeded with `s + i`, so a batch
/// is reproducible regardless of scheduling.
pub fn process_batch(jobs: Vec<BatchJob>, config: &FilterConfig) -> Vec<Result<GrayMatrix>> {
    tracing::debug!(jobs = jobs.len(), "processing batch");

    jobs.into_par_iter()
        .enumerate()
        .map(|(i, job)| {
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_entropy(),
            };
            let mut engine = MatrixFilterEngine::with_rng(job.image, config.clone(), rng);
            engine.apply_all(&job.directives)?;
            Ok(engine.into_inner())
        })
        .collect()
}
