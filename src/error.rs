use thiserror::Error;

/// Errors of fallible library operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid generator parameters: {0}")]
    InvalidParams(String),

    /// A picture or shape reached the output before ids were assigned
    #[error("No id assigned to {0}")]
    UnassignedId(String),

    #[error("All picture workers disconnected")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a picture is discarded and rebuilt from empty
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No valid shape found for slot {slot} after {tries} tries")]
    SlotExhausted { slot: usize, tries: usize },

    #[error("Found {found} inside pairs, at least {required} required")]
    TooFewInsides { found: usize, required: usize },

    #[error("Picture has already been built")]
    AlreadyBuilt,
}
