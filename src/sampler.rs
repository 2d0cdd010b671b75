use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    config::{BOUND, MARGIN},
    shape::{Shape, ShapeKind},
};

/// Uniform distribution over candidate shapes.
///
/// Each draw picks a size in `[min_size, max_size]`, a left-bottom corner in
/// `[MARGIN, BOUND - MARGIN)` on both axes, and one of the four kinds.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSampler {
    size: Uniform<i32>,
    coord: Uniform<i32>,
    kind: Uniform<usize>,
}
impl ShapeSampler {
    pub fn new(min_size: i32, max_size: i32) -> Self {
        assert!(
            min_size <= max_size,
            "Minimum size {} should not exceed maximum size {}",
            min_size,
            max_size
        );
        assert!(
            max_size <= BOUND - MARGIN,
            "Maximum size {} should not exceed {}",
            max_size,
            BOUND - MARGIN
        );
        Self {
            size: Uniform::new_inclusive(min_size, max_size),
            coord: Uniform::new(MARGIN, BOUND - MARGIN),
            kind: Uniform::new(0, ShapeKind::ALL.len()),
        }
    }
}
impl Distribution<Shape> for ShapeSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let size = self.size.sample(rng);
        let x = self.coord.sample(rng);
        let y = self.coord.sample(rng);
        let kind = ShapeKind::ALL[self.kind.sample(rng)];
        Shape::new(kind, x, y, size)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let sampler = ShapeSampler::new(3, 12);
        let mut rng = StdRng::seed_from_u64(11);
        for shape in sampler.sample_iter(&mut rng).take(2000) {
            assert!((3..=12).contains(&shape.size()));
            let origin = shape.origin();
            assert!((MARGIN..BOUND - MARGIN).contains(&origin.x()));
            assert!((MARGIN..BOUND - MARGIN).contains(&origin.y()));
        }
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let sampler = ShapeSampler::new(2, 98);
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 4];
        for shape in sampler.sample_iter(&mut rng).take(500) {
            let idx = ShapeKind::ALL
                .iter()
                .position(|k| *k == shape.kind())
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let sampler = ShapeSampler::new(2, 98);
        let a: Vec<Shape> = sampler
            .sample_iter(StdRng::seed_from_u64(42))
            .take(20)
            .collect();
        let b: Vec<Shape> = sampler
            .sample_iter(StdRng::seed_from_u64(42))
            .take(20)
            .collect();
        assert_eq!(a, b);
    }
}
