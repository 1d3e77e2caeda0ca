//! Build configuration loading from the source root.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::config::CONFIG_FILE;
use crate::domain::{AppError, BuildConfig};

/// Load `cmbuild.toml` from `root`, falling back to defaults when it is absent.
pub fn load_config(root: &Path) -> Result<BuildConfig, AppError> {
    let config_path = root.join(CONFIG_FILE);

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(BuildConfig::default());
        }
        Err(e) => return Err(AppError::Io(e)),
    };

    debug!(path = %config_path.display(), "loading config");
    BuildConfig::parse(&content).map_err(|e| match e {
        AppError::Configuration(message) => {
            AppError::Configuration(format!("{}: {}", config_path.display(), message))
        }
        other => other,
    })
}
