use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, ToolInvocation};
use crate::ports::BuildToolPort;

/// Runs build tool invocations as child processes.
///
/// The child inherits stdio, so the tool's own diagnostics reach the user unchanged.
#[derive(Debug, Clone, Default)]
pub struct BuildToolCommandAdapter;

impl BuildToolCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl BuildToolPort for BuildToolCommandAdapter {
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        debug!(
            step = %invocation.step,
            command = %invocation.display_command(),
            "spawning build tool"
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|e| AppError::ToolSpawn { program: invocation.program.clone(), source: e })?;

        if !status.success() {
            return Err(AppError::ExternalToolFailure {
                step: invocation.step,
                program: invocation.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
