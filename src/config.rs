use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier type for pictures and shapes
pub type Id = u64;

/// Width and height of the canvas
pub const BOUND: i32 = 100;

/// Minimum horizontal/vertical separation between two shapes, and between a
/// shape and the canvas edge
pub const MARGIN: i32 = 2;

/// Maximum number of candidates drawn for one shape slot
pub const MAX_TRY: usize = 100_000_000;

/// Number of pictures stored in one fold
pub const CUTOFF: usize = 1_000_000;

/// Progress is reported whenever the picture count is a multiple of this
pub const PRINT_GRAN: u64 = 5_000;

/// Ranges that the random picture distribution draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub min_elements: usize,
    pub max_elements: usize,
    pub min_size: i32,
    pub max_size: i32,
    /// Minimum number of shape pairs where one encloses the other
    pub min_insides: usize,
}
impl GeneratorParams {
    pub fn new(
        min_elements: usize,
        max_elements: usize,
        min_size: i32,
        max_size: i32,
        min_insides: usize,
    ) -> Self {
        Self {
            min_elements,
            max_elements,
            min_size,
            max_size,
            min_insides,
        }
    }

    /// Reject parameter sets that are malformed or can never produce a picture.
    ///
    /// Sizes above `BOUND - MARGIN` are refused outright: no such shape fits on
    /// the canvas. `min_insides` is checked against the pairs of the smallest
    /// picture, because the shape count is drawn once and kept across retries.
    /// Sets that are only unlikely to succeed pass, and picture generation may
    /// then retry indefinitely.
    pub fn validate(&self) -> Result<()> {
        if self.min_elements == 0 {
            return Err(Error::InvalidParams(String::from(
                "min_elements should be positive",
            )));
        }
        if self.min_elements > self.max_elements {
            return Err(Error::InvalidParams(format!(
                "min_elements {} is greater than max_elements {}",
                self.min_elements, self.max_elements
            )));
        }
        if self.min_size <= 0 {
            return Err(Error::InvalidParams(format!(
                "min_size should be positive, found {}",
                self.min_size
            )));
        }
        if self.min_size > self.max_size {
            return Err(Error::InvalidParams(format!(
                "min_size {} is greater than max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.min_size >= BOUND - MARGIN {
            return Err(Error::InvalidParams(format!(
                "min_size {} can never fit on a canvas of {} with margin {}",
                self.min_size, BOUND, MARGIN
            )));
        }
        if self.max_size > BOUND - MARGIN {
            return Err(Error::InvalidParams(format!(
                "max_size {} is larger than a canvas of {} with margin {} allows",
                self.max_size, BOUND, MARGIN
            )));
        }
        let min_pairs = self.min_elements * (self.min_elements - 1) / 2;
        if self.min_insides > min_pairs {
            return Err(Error::InvalidParams(format!(
                "min_insides {} exceeds the {} pairs a picture of {} shapes has",
                self.min_insides, min_pairs, self.min_elements
            )));
        }
        Ok(())
    }
}
impl Default for GeneratorParams {
    fn default() -> Self {
        Self::new(4, 6, 2, 98, 1)
    }
}

/// Knobs of a generation run that do not change the picture distribution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Pictures per fold
    pub chunk_size: usize,
    /// Progress period in pictures
    pub print_every: u64,
    /// Candidates drawn per shape slot before the picture is abandoned
    pub max_tries: usize,
    /// Worker threads building pictures, 1 for a single-threaded run
    pub threads: usize,
    /// Fixed seed for a reproducible run
    pub seed: Option<u64>,
}
impl Default for RunSettings {
    fn default() -> Self {
        Self {
            chunk_size: CUTOFF,
            print_every: PRINT_GRAN,
            max_tries: MAX_TRY,
            threads: 1,
            seed: None,
        }
    }
}
impl RunSettings {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidParams(String::from(
                "chunk_size should be positive",
            )));
        }
        if self.print_every == 0 {
            return Err(Error::InvalidParams(String::from(
                "print_every should be positive",
            )));
        }
        if self.threads == 0 {
            return Err(Error::InvalidParams(String::from(
                "threads should be positive",
            )));
        }
        Ok(())
    }
}

/// File-backed configuration, every field optional
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorParams,
    pub run: RunSettings,
}
impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.run.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.generator, GeneratorParams::new(4, 6, 2, 98, 1));
        assert_eq!(config.run.chunk_size, CUTOFF);
        assert_eq!(config.run.print_every, PRINT_GRAN);
        assert_eq!(config.run.max_tries, MAX_TRY);
        assert_eq!(config.run.threads, 1);
        assert!(config.run.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config =
            Config::from_json(r#"{"generator": {"min_insides": 2}, "run": {"seed": 7}}"#).unwrap();
        assert_eq!(config.generator.min_insides, 2);
        assert_eq!(config.generator.max_elements, 6);
        assert_eq!(config.run.seed, Some(7));
        assert_eq!(config.run.chunk_size, CUTOFF);
    }

    #[test]
    fn test_bad_json() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_impossible_params() {
        assert!(GeneratorParams::new(0, 3, 2, 10, 0).validate().is_err());
        assert!(GeneratorParams::new(5, 3, 2, 10, 0).validate().is_err());
        assert!(GeneratorParams::new(2, 3, 0, 10, 0).validate().is_err());
        assert!(GeneratorParams::new(2, 3, 12, 10, 0).validate().is_err());
        assert!(GeneratorParams::new(2, 3, 98, 99, 0).validate().is_err());
        // three shapes have three pairs
        assert!(GeneratorParams::new(3, 3, 2, 10, 3).validate().is_ok());
        assert!(GeneratorParams::new(3, 4, 2, 10, 4).validate().is_err());
        // a two-shape picture, once drawn, can never reach three insides
        assert!(GeneratorParams::new(2, 3, 2, 10, 3).validate().is_err());
        assert!(GeneratorParams::new(2, 3, 2, 10, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_shapes() {
        assert!(GeneratorParams::new(2, 2, 2, BOUND - MARGIN, 0)
            .validate()
            .is_ok());
        assert!(GeneratorParams::new(2, 2, 2, BOUND - MARGIN + 1, 0)
            .validate()
            .is_err());
        let err = GeneratorParams::new(2, 2, 2, i32::MAX, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
        assert!(GeneratorParams::new(2, 2, 2, 50_000, 0).validate().is_err());
    }

    #[test]
    fn test_run_settings_validate() {
        let mut run = RunSettings::default();
        run.chunk_size = 0;
        assert!(run.validate().is_err());
        let run = RunSettings {
            threads: 0,
            ..RunSettings::default()
        };
        assert!(run.validate().is_err());
    }
}
