use crate::picture::Picture;

/// Worker-to-Manager messages
pub(crate) enum W2M {
    /// A valid picture without ids, and how many attempts were discarded for it
    Built {
        worker: usize,
        picture: Picture,
        failures: usize,
    },
}
