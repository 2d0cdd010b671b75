use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::{debug, warn};

use crate::{
    config::GeneratorParams,
    picture::{Picture, PictureParams},
    sampler::ShapeSampler,
};

/// Failed attempts between two retry warnings
const RETRY_REPORT: usize = 10_000;

/// Produces valid pictures by rejection sampling at the picture level
#[derive(Clone, Copy, Debug)]
pub struct PictureBuilder {
    params: PictureParams,
    count: Uniform<usize>,
}
impl PictureBuilder {
    pub fn new(generator: &GeneratorParams, max_tries: usize) -> Self {
        assert!(
            generator.min_elements <= generator.max_elements,
            "Minimum element count {} should not exceed maximum {}",
            generator.min_elements,
            generator.max_elements
        );
        Self {
            params: PictureParams {
                sampler: ShapeSampler::new(generator.min_size, generator.max_size),
                min_insides: generator.min_insides,
                max_tries,
            },
            count: Uniform::new_inclusive(generator.min_elements, generator.max_elements),
        }
    }
    pub fn params(&self) -> &PictureParams {
        &self.params
    }

    /// Build one valid picture, returning it with the number of discarded attempts.
    ///
    /// The shape count is drawn once and every attempt restarts from an empty
    /// picture. There is no upper bound on attempts, so parameters that can
    /// rarely be satisfied may keep this running for a long time.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> (Picture, usize) {
        let size = self.count.sample(rng);
        let mut failures = 0;
        loop {
            let mut picture = Picture::new();
            match picture.create_picture(size, &self.params, rng) {
                Ok(()) => {
                    debug!(
                        "Built picture of {} shapes with {} inside pairs after {} failures",
                        size,
                        picture.inside().len(),
                        failures
                    );
                    return (picture, failures);
                }
                Err(e) => {
                    failures += 1;
                    if failures % RETRY_REPORT == 0 {
                        warn!("Error trials: {} (last: {})", failures, e);
                    }
                }
            }
        }
    }
}
