//! Configuration for hampath
//!
//! Configuration lives in `hampath.toml`. Lookup order:
//! 1. an explicit path (`--config`)
//! 2. `$HAMPATH_CONFIG_DIR/hampath.toml`
//! 3. `<platform config dir>/hampath/hampath.toml`
//!
//! A missing file yields the defaults; a malformed one is an error.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HamPathError, Result};

pub use types::{HamPathConfig, OutputConfig, SearchConfig};

const CONFIG_DIR: &str = "hampath";
const CONFIG_FILE: &str = "hampath.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "HAMPATH_CONFIG_DIR";

impl HamPathConfig {
    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path, falling back to the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HamPathError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: HamPathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HamPathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
