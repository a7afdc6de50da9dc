//! Host lifecycle.
//!
//! A [`Host`] owns the ability registry, the rule registry, and where its
//! load options come from. `load` runs the pipeline once. `reload` re-reads
//! the settings file, if there is one, and runs the pipeline again the same
//! way. Rules from earlier loads stay unless the settings ask for a clear.

use std::path::{Path, PathBuf};

use collider_engine::{AbilityTable, CollisionManager, LoadReport, Loader, LoaderConfig};
use collider_foundation::{AbilityId, Result};
use tracing::info;

use crate::settings::{self, Settings};

/// Options forced on regardless of the settings file.
#[derive(Clone, Debug, Default)]
struct Overrides {
    verbose: bool,
    clear_existing: bool,
    source: Option<PathBuf>,
}

impl Overrides {
    fn apply(&self, mut config: LoaderConfig) -> LoaderConfig {
        config.verbose |= self.verbose;
        config.clear_existing |= self.clear_existing;
        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        config
    }
}

/// Owns the registries and runs loads against them.
pub struct Host {
    abilities: AbilityTable,
    collisions: CollisionManager<AbilityId>,
    settings_path: Option<PathBuf>,
    config: LoaderConfig,
    overrides: Overrides,
    loads: usize,
}

impl Host {
    /// Creates a host with a fixed configuration.
    #[must_use]
    pub fn new(abilities: AbilityTable, config: LoaderConfig) -> Self {
        Self {
            abilities,
            collisions: CollisionManager::new(),
            settings_path: None,
            config,
            overrides: Overrides::default(),
            loads: 0,
        }
    }

    /// Creates a host whose configuration comes from a settings file.
    ///
    /// # Errors
    /// Returns an error if the settings file cannot be read or is invalid.
    pub fn from_settings(abilities: AbilityTable, settings_path: impl Into<PathBuf>) -> Result<Self> {
        let settings_path = settings_path.into();
        let config = read_config(&settings_path)?;
        let mut host = Self::new(abilities, config);
        host.settings_path = Some(settings_path);
        Ok(host)
    }

    /// Builder method to seed the rule registry with existing rules.
    #[must_use]
    pub fn with_collisions(mut self, collisions: CollisionManager<AbilityId>) -> Self {
        self.collisions = collisions;
        self
    }

    /// Builder method to force verbose logging on.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.overrides.verbose = verbose;
        self
    }

    /// Builder method to force clearing existing rules before each load.
    #[must_use]
    pub fn with_clear_existing(mut self, clear: bool) -> Self {
        self.overrides.clear_existing = clear;
        self
    }

    /// Builder method to override the rule file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.overrides.source = Some(source.into());
        self
    }

    /// Returns the configuration the next load will use.
    #[must_use]
    pub fn config(&self) -> LoaderConfig {
        self.overrides.apply(self.config.clone())
    }

    /// Returns the settings file, if any.
    #[must_use]
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Returns the ability registry.
    #[must_use]
    pub fn abilities(&self) -> &AbilityTable {
        &self.abilities
    }

    /// Returns the rule registry.
    #[must_use]
    pub fn collisions(&self) -> &CollisionManager<AbilityId> {
        &self.collisions
    }

    /// Returns the number of completed loads.
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Runs the pipeline once with the current configuration.
    ///
    /// # Errors
    /// Returns an I/O error if the rule file cannot be opened.
    pub fn load(&mut self) -> Result<LoadReport> {
        let config = self.config();
        let report = Loader::new(&self.abilities, &mut self.collisions, config).load()?;
        self.loads += 1;
        Ok(report)
    }

    /// Loads rules from in-memory source with the current configuration.
    pub fn load_str(&mut self, source: &str) -> LoadReport {
        let config = self.config();
        let report = Loader::new(&self.abilities, &mut self.collisions, config).load_str(source);
        self.loads += 1;
        report
    }

    /// Re-reads the settings file and runs the pipeline again.
    ///
    /// # Errors
    /// Returns an error if the settings file cannot be read or is invalid,
    /// or if the rule file cannot be opened. A failed settings read leaves
    /// the previous configuration in place.
    pub fn reload(&mut self) -> Result<LoadReport> {
        if let Some(path) = &self.settings_path {
            self.config = read_config(path)?;
        }
        let report = self.load()?;
        info!("Collisions have reloaded");
        Ok(report)
    }
}

fn read_config(settings_path: &Path) -> Result<LoaderConfig> {
    let settings = Settings::load(settings_path)?;
    Ok(settings.to_loader_config(settings::base_dir(settings_path)))
}
