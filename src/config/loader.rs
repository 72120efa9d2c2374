//! Config discovery and loading
//!
//! Every file matching `gsh-*.json` directly inside the home directory is
//! parsed into one [`Config`]. Files are returned in the order the glob
//! yields them (alphabetical).

use crate::config::Config;
use crate::types::{GshError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name pattern searched for in the home directory
pub const CONFIG_FILE_PATTERN: &str = "gsh-*.json";

/// How a matched file with malformed JSON is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Keep going with a zero-valued `Config` in that slot and log a warning
    #[default]
    Permissive,
    /// Fail the whole load with `GshError::Parse`
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    home_dir: Option<PathBuf>,
    parse_mode: ParseMode,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `dir` instead of the current user's home directory
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.parse_mode
    }

    fn resolve_home_dir(&self) -> Result<PathBuf> {
        match &self.home_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir().ok_or(GshError::HomeDirUnavailable),
        }
    }

    /// List the config files that would be loaded
    pub fn config_paths(&self) -> Result<Vec<PathBuf>> {
        let home = self.resolve_home_dir()?;
        let home_str = home
            .to_str()
            .ok_or_else(|| GshError::InvalidPath(home.clone()))?;

        // The home path itself may contain glob metacharacters
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(home_str.trim_end_matches('/')),
            CONFIG_FILE_PATTERN
        );
        debug!("Searching for config files: {}", pattern);

        let mut paths = Vec::new();
        for entry in glob::glob(&pattern)? {
            paths.push(entry?);
        }

        debug!("Found {} config files in {}", paths.len(), home.display());
        Ok(paths)
    }

    /// Load every matching config file
    pub fn load(&self) -> Result<Vec<Config>> {
        let paths = self.config_paths()?;

        let mut configs = Vec::with_capacity(paths.len());
        for path in &paths {
            configs.push(self.load_file(path)?);
        }

        info!("Loaded {} gsh configurations", configs.len());
        Ok(configs)
    }

    fn load_file(&self, path: &Path) -> Result<Config> {
        let content = std::fs::read(path).map_err(|source| GshError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // Undecodable bytes are a content problem, not an I/O one
        match Config::from_json_slice(&content) {
            Ok(config) => {
                debug!(
                    "Loaded config '{}' from {} ({} hosts, {} operations)",
                    config.name,
                    path.display(),
                    config.hosts.len(),
                    config.operations.len()
                );
                Ok(config)
            }
            Err(source) => match self.parse_mode {
                ParseMode::Permissive => {
                    warn!(
                        "Failed to parse config file {}: {}; using an empty config",
                        path.display(),
                        source
                    );
                    Ok(Config::default())
                }
                ParseMode::Strict => Err(GshError::Parse {
                    path: path.to_path_buf(),
                    source,
                }),
            },
        }
    }
}

/// Load all `gsh-*.json` configs from the current user's home directory
pub fn load_configs() -> Result<Vec<Config>> {
    ConfigLoader::new().load()
}
