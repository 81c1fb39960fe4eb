//! Configuration loading
//!
//! Values are layered with figment: built-in defaults, then an optional
//! TOML/YAML file, then `RES_PACKER_*` environment variables. Command-line
//! overrides are applied on top by [`merge_cli_with_config`].

use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::PathClassifier;
use crate::domain::{InvalidEntryPolicy, DEFAULT_ARCHIVE_NAME, DEFAULT_MAX_NESTING_DEPTH};
use crate::error::{PackError, Result};
use crate::pack::PackOptions;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "RES_PACKER_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackerConfig {
    /// Archive to create, relative to the working directory
    pub output: PathBuf,

    /// Maximum nesting depth beyond which a path is treated as external
    pub max_nesting_depth: usize,

    /// Whether a malformed entry ends the run or is skipped
    pub on_invalid_entry: InvalidEntryPolicy,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_ARCHIVE_NAME),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            on_invalid_entry: InvalidEntryPolicy::default(),
        }
    }
}

impl PackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_nesting_depth == 0 {
            return Err(PackError::Config(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(PackError::Config("output must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn pack_options(&self) -> PackOptions {
        PackOptions {
            classifier: PathClassifier::new(self.max_nesting_depth),
            on_invalid_entry: self.on_invalid_entry,
        }
    }
}

/// Load configuration from defaults, an optional file, and the environment.
pub fn load_config(config_path: Option<&Path>) -> Result<PackerConfig> {
    figment(config_path).extract().map_err(PackError::from)
}

fn figment(config_path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(PackerConfig::default()));
    if let Some(path) = config_path {
        figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => figment.merge(Yaml::file_exact(path)),
            _ => figment.merge(Toml::file_exact(path)),
        };
    }
    figment.merge(Env::prefixed(ENV_PREFIX))
}
