//! Runner configuration files
//!
//! A command looks for its TOML file system-wide, then in the user config
//! directory, then in the working directory. The first candidate that
//! parses is used; broken candidates are skipped with a warning.

use crate::config::RunnerConfig;
use crate::error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

/// Reads `[runner]`/`[defaults]` tables from disk
pub struct ConfigFile;

impl ConfigFile {
    /// Parse one TOML file; absent tables keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        Ok(toml::from_str(&text)?)
    }

    /// First usable configuration for `command` on the search path
    pub fn load_default(command: &str) -> Option<RunnerConfig> {
        Self::default_paths(command)
            .into_iter()
            .filter(|path| path.is_file())
            .find_map(|path| match Self::load(&path) {
                Ok(config) => {
                    log::info!("Using {} configuration from {}", command, path.display());
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
    }

    /// Candidate files for `command`, in search order
    pub fn default_paths(command: &str) -> Vec<PathBuf> {
        let system = Path::new("/etc").join(command).join("config.toml");
        let user = dirs::config_dir().map(|dir| dir.join(command).join("config.toml"));
        let local = [format!("{}.toml", command), format!(".{}.toml", command)].map(PathBuf::from);

        std::iter::once(system).chain(user).chain(local).collect()
    }
}
