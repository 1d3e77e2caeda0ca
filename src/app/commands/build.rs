use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, BuildLayout, BuildStep};
use crate::ports::BuildToolPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub root: PathBuf,
    pub build_path: PathBuf,
    /// True when this run created the build directory.
    pub created_build_dir: bool,
    pub completed_steps: Vec<BuildStep>,
}

/// Ensure the build directory, then configure, then build. Stops at the first failure.
pub fn execute<T: BuildToolPort>(ctx: &AppContext<T>) -> Result<BuildOutcome, AppError> {
    let layout = ctx.layout();
    debug!(
        root = %layout.root().display(),
        build_path = %layout.build_path().display(),
        "resolved build layout"
    );

    let created_build_dir = ensure_build_dir(layout.build_path())?;

    let mut completed_steps = Vec::with_capacity(BuildStep::ORDERED.len());
    for step in BuildStep::ORDERED {
        run_step(ctx, layout, step)?;
        completed_steps.push(step);
    }

    Ok(BuildOutcome {
        root: layout.root().to_path_buf(),
        build_path: layout.build_path().to_path_buf(),
        created_build_dir,
        completed_steps,
    })
}

/// Create the build directory and any missing parents. Existing contents are left alone.
///
/// Returns whether the directory had to be created.
pub fn ensure_build_dir(build_path: &Path) -> Result<bool, AppError> {
    if build_path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(build_path)?;
    info!(path = %build_path.display(), "created build directory");
    Ok(true)
}

fn run_step<T: BuildToolPort>(
    ctx: &AppContext<T>,
    layout: &BuildLayout,
    step: BuildStep,
) -> Result<(), AppError> {
    let invocation = step.invocation(&ctx.config().tool.program, layout);
    info!(%step, command = %invocation.display_command(), "running step");
    ctx.tool().run(&invocation)?;
    info!(%step, "step finished");
    Ok(())
}
