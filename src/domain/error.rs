use std::io;

use thiserror::Error;

use super::BuildStep;

/// Library-wide error type for cmbuild operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Source root is missing or not a directory.
    #[error("Invalid source directory: {0}")]
    InvalidRoot(String),

    /// The build tool executable could not be started.
    #[error("Failed to run '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The build tool ran and exited unsuccessfully.
    #[error("{step} step failed: '{program}' {}", describe_exit(.code))]
    ExternalToolFailure { step: BuildStep, program: String, code: Option<i32> },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code to surface for this error.
    ///
    /// A failing tool's own exit code is propagated; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ExternalToolFailure { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
