//! Random generator of labeled Bongard-style pictures: canvases of squares,
//! circles, and triangles placed without partial overlap, annotated with
//! inside, east, and north relations between their shapes.

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod parallel;
pub mod picture;
pub mod prelude;
pub mod region;
pub mod sampler;
pub mod shape;

pub use builder::PictureBuilder;
pub use config::{Config, GeneratorParams, Id, RunSettings};
pub use error::{BuildError, Error, Result};
pub use generator::Generator;
pub use output::{ChunkSink, FlatFileWriter, Summary, Table};
pub use picture::{IdCounters, Picture, PictureState};
pub use shape::{Shape, ShapeKind};
