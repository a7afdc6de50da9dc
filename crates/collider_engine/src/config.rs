//! Configuration for a collision load.

use std::path::{Path, PathBuf};

/// Default name of the collision source file.
pub const DEFAULT_SOURCE: &str = "collisions.txt";

/// Configuration for one load.
///
/// Values are owned by the host; the loader only reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Log every group binding and rule operation.
    pub verbose: bool,
    /// Remove every existing rule before loading.
    pub clear_existing: bool,
    /// Path of the collision source file.
    pub source: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            clear_existing: false,
            source: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl LoaderConfig {
    /// Creates a configuration for the given source file.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Builder method to enable/disable verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder method to enable/disable clearing existing rules.
    #[must_use]
    pub fn with_clear_existing(mut self, clear: bool) -> Self {
        self.clear_existing = clear;
        self
    }

    /// Builder method to set the source path.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Returns the source path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}
