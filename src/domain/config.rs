//! Build configuration domain models.

use serde::Deserialize;

use super::AppError;
use super::layout::{DEFAULT_BUILD_DIR, validate_build_dir_name};

/// File name of the optional configuration at the source root.
pub const CONFIG_FILE: &str = "cmbuild.toml";

/// Default external build tool executable.
pub const DEFAULT_PROGRAM: &str = "cmake";

/// Configuration loaded from `cmbuild.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Build output settings.
    #[serde(default)]
    pub build: BuildSettings,
    /// External tool settings.
    #[serde(default)]
    pub tool: ToolSettings,
}

/// Build output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Build directory name, relative to the source root.
    #[serde(default = "default_build_dir")]
    pub dir: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { dir: default_build_dir() }
    }
}

/// External tool settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    /// Executable name or path.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self { program: default_program() }
    }
}

fn default_build_dir() -> String {
    DEFAULT_BUILD_DIR.to_string()
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl BuildConfig {
    /// Parse and validate configuration content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: BuildConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_build_dir_name(&self.build.dir)?;
        if self.tool.program.trim().is_empty() {
            return Err(AppError::config_error("tool.program must not be empty"));
        }
        Ok(())
    }
}
