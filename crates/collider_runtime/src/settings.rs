//! Host settings file.
//!
//! Settings are YAML with a single `Properties` block:
//!
//! ```yaml
//! Properties:
//!   Verbose: false
//!   DisableCoreCollisions: false
//!   CollisionFile: collisions.txt
//! ```
//!
//! Every key is optional. `CollisionFile` is resolved against the directory
//! that holds the settings file.

use std::fs;
use std::path::{Path, PathBuf};

use collider_engine::LoaderConfig;
use collider_engine::config::DEFAULT_SOURCE;
use collider_foundation::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default file name of the settings file inside a data directory.
pub const DEFAULT_SETTINGS: &str = "config.yml";

/// Written as the rule file of a fresh data directory.
const DEFAULT_RULES: &str = "\
# Collision rules, one per line.
#
#   A > B    A removes B
#   A < B    B removes A
#   A = B    both are removed
#   A ~ B    neither is removed
#   A x B    remove every rule between A and B
#
# group \"Name\" {A, B, $Other} declares a group; use it later as $Name.
";

/// The whole settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The `Properties` block.
    #[serde(rename = "Properties", default)]
    pub properties: Properties,
}

/// Load options read from the `Properties` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Properties {
    /// Log every group binding and rule operation.
    pub verbose: bool,
    /// Remove every existing rule before loading.
    pub disable_core_collisions: bool,
    /// Rule file, relative to the settings directory.
    pub collision_file: PathBuf,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            verbose: false,
            disable_core_collisions: false,
            collision_file: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl Settings {
    /// Parses settings from YAML text.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    /// Returns a settings error if the text is not valid YAML or a key has
    /// the wrong type.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::settings(e.to_string()))
    }

    /// Reads settings from a file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a settings error
    /// if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml(&content).map_err(|e| {
            e.with_context(ErrorContext::new().with_source(path.display().to_string()))
        })
    }

    /// Renders settings as YAML.
    ///
    /// # Errors
    /// Returns a settings error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::settings(e.to_string()))
    }

    /// Builds the loader configuration, resolving the rule file against
    /// `base_dir`.
    #[must_use]
    pub fn to_loader_config(&self, base_dir: &Path) -> LoaderConfig {
        LoaderConfig::new(base_dir.join(&self.properties.collision_file))
            .with_verbose(self.properties.verbose)
            .with_clear_existing(self.properties.disable_core_collisions)
    }
}

/// Returns the directory a settings file's relative paths resolve against.
#[must_use]
pub fn base_dir(settings_path: &Path) -> &Path {
    settings_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Creates `dir` with a default settings file and rule file, keeping any
/// that already exist.
///
/// Returns the path of the settings file.
///
/// # Errors
/// Returns an I/O error if the directory or a file cannot be written, or a
/// settings error if an existing settings file is invalid.
pub fn ensure_defaults(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let settings_path = dir.join(DEFAULT_SETTINGS);
    if !settings_path.exists() {
        let yaml = Settings::default().to_yaml()?;
        fs::write(&settings_path, yaml).map_err(|e| Error::io(&settings_path, e))?;
        info!("Wrote default settings to {}", settings_path.display());
    }

    let settings = Settings::load(&settings_path)?;
    let rules_path = dir.join(&settings.properties.collision_file);
    if !rules_path.exists() {
        fs::write(&rules_path, DEFAULT_RULES).map_err(|e| Error::io(&rules_path, e))?;
        info!("Wrote empty collision file to {}", rules_path.display());
    }

    Ok(settings_path)
}
