pub use super::builder::PictureBuilder;
pub use super::config::{Config, GeneratorParams, Id, RunSettings, BOUND, MARGIN};
pub use super::generator::Generator;
pub use super::output::{ChunkSink, FlatFileWriter, Summary};
pub use super::picture::{IdCounters, Picture, PictureParams, PictureState};
pub use super::region::{Point, Rect};
pub use super::sampler::ShapeSampler;
pub use super::shape::{Shape, ShapeKind};
