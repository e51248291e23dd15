use std::path::PathBuf;

/// What to do when a single lookup fails at the request level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run before anything is written.
    #[default]
    Abort,
    /// Log the failure, keep the record without coordinates and carry on.
    Skip,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub base_url: String,
    pub policy: FailurePolicy,
}
