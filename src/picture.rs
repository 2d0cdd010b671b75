use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{config::Id, error::BuildError, sampler::ShapeSampler, shape::Shape};

/// Ordered pair of shape indices into the owning picture
pub type Pair = (usize, usize);

/// Lifecycle of a picture under construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PictureState {
    Unpopulated,
    Building,
    Valid,
    Failed,
}

/// Next picture and shape ids to hand out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    pub picture: Id,
    pub shape: Id,
}
impl IdCounters {
    pub fn new(picture: Id, shape: Id) -> Self {
        Self { picture, shape }
    }
    pub fn next_picture(&mut self) -> Id {
        let id = self.picture;
        self.picture += 1;
        id
    }
    pub fn next_shape(&mut self) -> Id {
        let id = self.shape;
        self.shape += 1;
        id
    }
}

/// Everything a single picture build draws on
#[derive(Clone, Copy, Debug)]
pub struct PictureParams {
    pub sampler: ShapeSampler,
    pub min_insides: usize,
    pub max_tries: usize,
}

/// A canvas of non-conflicting shapes and the relations derived between them.
///
/// Relations hold indices into `shapes`. An `inside` pair (a, b) reads "a is
/// inside b", an `east` pair reads "a is east of b", and a `north` pair reads
/// "a is north of b".
#[derive(Clone, Debug)]
pub struct Picture {
    id: Option<Id>,
    shapes: Vec<Shape>,
    inside: Vec<Pair>,
    east: Vec<Pair>,
    north: Vec<Pair>,
    state: PictureState,
}
impl Picture {
    pub fn new() -> Self {
        Self {
            id: None,
            shapes: Vec::new(),
            inside: Vec::new(),
            east: Vec::new(),
            north: Vec::new(),
            state: PictureState::Unpopulated,
        }
    }

    // Getters
    pub fn id(&self) -> Option<Id> {
        self.id
    }
    pub fn shapes(&self) -> &Vec<Shape> {
        &self.shapes
    }
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
    pub fn state(&self) -> PictureState {
        self.state
    }
    pub fn inside(&self) -> &Vec<Pair> {
        &self.inside
    }
    pub fn east(&self) -> &Vec<Pair> {
        &self.east
    }
    pub fn north(&self) -> &Vec<Pair> {
        &self.north
    }

    /// Place `size` random shapes, then derive relations.
    ///
    /// Shapes already placed are never removed; on any error the picture is
    /// left `Failed` and should be discarded.
    pub fn create_picture<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        params: &PictureParams,
        rng: &mut R,
    ) -> Result<(), BuildError> {
        if self.state != PictureState::Unpopulated {
            return Err(BuildError::AlreadyBuilt);
        }
        self.state = PictureState::Building;

        while self.shapes.len() < size {
            let slot = self.shapes.len();
            let mut tries = 0;
            loop {
                let candidate = self.create_shape(&params.sampler, rng);
                if self.try_add(candidate) {
                    break;
                }
                tries += 1;
                if tries > params.max_tries {
                    self.state = PictureState::Failed;
                    return Err(BuildError::SlotExhausted { slot, tries });
                }
            }
        }

        self.finish(params.min_insides)
    }

    /// Draw one candidate shape
    pub fn create_shape<R: Rng + ?Sized>(&self, sampler: &ShapeSampler, rng: &mut R) -> Shape {
        sampler.sample(rng)
    }

    /// Check that `candidate` stays on the canvas and conflicts with no placed shape
    pub fn is_valid(&self, candidate: &Shape) -> bool {
        !candidate.overflow() && self.shapes.iter().all(|s| !candidate.conflict(s))
    }

    /// Place `shape` if it is valid, returning whether it was placed
    pub fn try_add(&mut self, shape: Shape) -> bool {
        if !self.is_valid(&shape) {
            return false;
        }
        trace!("Placed {} as shape {}", shape, self.shapes.len());
        self.shapes.push(shape);
        if self.state == PictureState::Unpopulated {
            self.state = PictureState::Building;
        }
        true
    }

    /// Derive relations and accept the picture if it has enough inside pairs
    pub fn finish(&mut self, min_insides: usize) -> Result<(), BuildError> {
        self.populate();
        if self.inside.len() < min_insides {
            self.state = PictureState::Failed;
            return Err(BuildError::TooFewInsides {
                found: self.inside.len(),
                required: min_insides,
            });
        }
        self.state = PictureState::Valid;
        Ok(())
    }

    /// Recompute the inside, east, and north relations over every shape pair
    pub fn populate(&mut self) {
        self.inside.clear();
        self.east.clear();
        self.north.clear();

        for i in 0..self.shapes.len() {
            let a = &self.shapes[i];
            for j in i + 1..self.shapes.len() {
                let b = &self.shapes[j];
                if a.is_inside(b) {
                    self.inside.push((i, j));
                } else if b.is_inside(a) {
                    self.inside.push((j, i));
                } else {
                    if a.is_east_of(b) {
                        self.east.push((i, j));
                    } else if b.is_east_of(a) {
                        self.east.push((j, i));
                    }

                    // Exactly one north pair is recorded, even for shapes
                    // side by side.
                    if a.is_north_of(b) {
                        self.north.push((i, j));
                    } else {
                        self.north.push((j, i));
                    }
                }
            }
        }
    }

    /// Take the next picture id and one shape id per shape, in insertion order
    pub fn assign_ids(&mut self, ids: &mut IdCounters) {
        self.id = Some(ids.next_picture());
        for shape in self.shapes.iter_mut() {
            shape.set_id(ids.next_shape());
        }
    }
}
impl Default for Picture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn params(min_size: i32, max_size: i32, min_insides: usize, max_tries: usize) -> PictureParams {
        PictureParams {
            sampler: ShapeSampler::new(min_size, max_size),
            min_insides,
            max_tries,
        }
    }

    #[test]
    fn test_id_counters() {
        let mut ids = IdCounters::new(3, 10);
        assert_eq!(ids.next_picture(), 3);
        assert_eq!(ids.next_shape(), 10);
        assert_eq!(ids.next_shape(), 11);
        assert_eq!(ids, IdCounters::new(4, 12));
    }

    #[test]
    fn test_try_add_rejects_conflicts_and_overflow() {
        let mut picture = Picture::new();
        assert_eq!(picture.state(), PictureState::Unpopulated);
        assert!(picture.try_add(Shape::square(10, 10, 20)));
        assert_eq!(picture.state(), PictureState::Building);

        // partial overlap
        assert!(!picture.try_add(Shape::square(25, 25, 20)));
        // off the canvas
        assert!(!picture.try_add(Shape::circle(60, 60, 40)));
        // nested
        assert!(picture.try_add(Shape::square(15, 15, 5)));
        // apart
        assert!(picture.try_add(Shape::triangle(50, 50, 10, true)));
        assert_eq!(picture.len(), 3);
    }

    #[test]
    fn test_populate_relations() {
        let mut picture = Picture::new();
        // 1 is inside 0; 2 is east of both and level with them
        assert!(picture.try_add(Shape::square(10, 10, 30)));
        assert!(picture.try_add(Shape::circle(15, 15, 10)));
        assert!(picture.try_add(Shape::square(60, 10, 10)));
        // 3 is north of everything and horizontally overlaps 0 and 1
        assert!(picture.try_add(Shape::triangle(10, 60, 20, false)));
        picture.finish(1).unwrap();
        assert_eq!(picture.state(), PictureState::Valid);

        assert_eq!(picture.inside(), &vec![(1, 0)]);
        assert_eq!(picture.east(), &vec![(2, 0), (2, 1), (2, 3)]);
        // level pairs still get a north entry
        assert_eq!(
            picture.north(),
            &vec![(2, 0), (3, 0), (2, 1), (3, 1), (3, 2)]
        );
    }

    #[test]
    fn test_north_recorded_for_level_shapes() {
        let mut picture = Picture::new();
        assert!(picture.try_add(Shape::square(10, 10, 10)));
        assert!(picture.try_add(Shape::square(40, 10, 10)));
        picture.populate();
        assert!(picture.inside().is_empty());
        assert_eq!(picture.east(), &vec![(1, 0)]);
        // neither is north of the other, the later shape is recorded first
        assert_eq!(picture.north(), &vec![(1, 0)]);
    }

    #[test]
    fn test_east_omitted_for_stacked_shapes() {
        let mut picture = Picture::new();
        assert!(picture.try_add(Shape::square(10, 10, 10)));
        assert!(picture.try_add(Shape::square(12, 40, 10)));
        picture.populate();
        assert!(picture.east().is_empty());
        assert_eq!(picture.north(), &vec![(1, 0)]);
    }

    #[test]
    fn test_finish_requires_insides() {
        let mut picture = Picture::new();
        assert!(picture.try_add(Shape::square(10, 10, 10)));
        assert_eq!(
            picture.finish(1),
            Err(BuildError::TooFewInsides {
                found: 0,
                required: 1
            })
        );
        assert_eq!(picture.state(), PictureState::Failed);
    }

    #[test]
    fn test_create_picture_satisfies_constraints() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = params(2, 98, 0, 1_000_000);
        let mut picture = Picture::new();
        picture.create_picture(5, &params, &mut rng).unwrap();
        assert_eq!(picture.state(), PictureState::Valid);
        assert_eq!(picture.len(), 5);
        for (i, a) in picture.shapes().iter().enumerate() {
            assert!(!a.overflow());
            for b in &picture.shapes()[i + 1..] {
                assert!(!a.conflict(b));
            }
        }
        let pairs = 5 * 4 / 2;
        assert_eq!(picture.inside().len() + picture.north().len(), pairs);
    }

    #[test]
    fn test_create_picture_slot_exhausted() {
        // a second shape of size 97 never fits beside or inside the first
        let mut rng = StdRng::seed_from_u64(2);
        let params = params(97, 97, 0, 50);
        let mut picture = Picture::new();
        let err = picture.create_picture(2, &params, &mut rng).unwrap_err();
        assert!(matches!(err, BuildError::SlotExhausted { tries: 51, .. }));
        assert_eq!(picture.state(), PictureState::Failed);
    }

    #[test]
    fn test_create_picture_too_few_insides() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = params(2, 20, 1, 10_000);
        let mut picture = Picture::new();
        let err = picture.create_picture(1, &params, &mut rng).unwrap_err();
        assert_eq!(
            err,
            BuildError::TooFewInsides {
                found: 0,
                required: 1
            }
        );
    }

    #[test]
    fn test_create_picture_twice() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = params(2, 20, 0, 10_000);
        let mut picture = Picture::new();
        picture.create_picture(2, &params, &mut rng).unwrap();
        assert_eq!(
            picture.create_picture(2, &params, &mut rng),
            Err(BuildError::AlreadyBuilt)
        );
    }

    #[test]
    fn test_assign_ids() {
        let mut picture = Picture::new();
        assert!(picture.try_add(Shape::square(10, 10, 10)));
        assert!(picture.try_add(Shape::square(40, 10, 10)));
        let mut ids = IdCounters::new(7, 100);
        picture.assign_ids(&mut ids);
        assert_eq!(picture.id(), Some(7));
        let shape_ids: Vec<_> = picture.shapes().iter().map(|s| s.id()).collect();
        assert_eq!(shape_ids, vec![Some(100), Some(101)]);
        assert_eq!(ids, IdCounters::new(8, 102));
    }
}
