//! API Facade for the application.
//!
//! Glues together layout resolution, config loading, context creation and command
//! execution.

use std::path::{Path, PathBuf};

use crate::adapters::BuildToolCommandAdapter;
use crate::app::{AppContext, commands::build as build_command, config::load_config};
use crate::domain::layout::{default_root, resolve_root};
use crate::domain::{AppError, BuildLayout};
use crate::ports::BuildToolPort;

pub use crate::app::commands::build::BuildOutcome;

/// Options accepted by [`build`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Source root override. Defaults to the directory cmbuild was built from.
    pub source_dir: Option<PathBuf>,
}

/// Configure and build the project, resolving relative paths against the current directory.
pub fn build(options: BuildOptions) -> Result<BuildOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    build_from(&cwd, options)
}

/// Configure and build the project, resolving relative paths against `cwd`.
pub fn build_from(cwd: &Path, options: BuildOptions) -> Result<BuildOutcome, AppError> {
    build_with(cwd, options, BuildToolCommandAdapter::new())
}

/// Configure and build the project with a caller-supplied build tool.
pub fn build_with<T: BuildToolPort>(
    cwd: &Path,
    options: BuildOptions,
    tool: T,
) -> Result<BuildOutcome, AppError> {
    let ctx = create_context(cwd, options, tool)?;
    build_command::execute(&ctx)
}

fn create_context<T: BuildToolPort>(
    cwd: &Path,
    options: BuildOptions,
    tool: T,
) -> Result<AppContext<T>, AppError> {
    let requested = options.source_dir.unwrap_or_else(default_root);
    let root = resolve_root(&requested, cwd)?;
    let config = load_config(&root)?;
    let layout = BuildLayout::new(root, &config.build.dir)?;
    Ok(AppContext::new(layout, config, tool))
}
