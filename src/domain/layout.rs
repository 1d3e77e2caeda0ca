use std::path::{Component, Path, PathBuf};

use super::AppError;

/// Default relative name of the build output directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Source root used when none is given: the directory this crate was built from.
pub fn default_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Root, build directory name and build directory path, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    root: PathBuf,
    build_dir_name: String,
    build_path: PathBuf,
}

impl BuildLayout {
    /// Resolve `root` against `cwd`, canonicalize it and attach the build directory.
    pub fn resolve(root: &Path, cwd: &Path, build_dir_name: &str) -> Result<Self, AppError> {
        Self::new(resolve_root(root, cwd)?, build_dir_name)
    }

    /// Attach a validated build directory name to a resolved root.
    pub fn new(root: PathBuf, build_dir_name: &str) -> Result<Self, AppError> {
        validate_build_dir_name(build_dir_name)?;
        Ok(Self::from_parts(root, build_dir_name))
    }

    /// Assemble a layout from an already-absolute root without touching the filesystem.
    pub fn from_parts(root: PathBuf, build_dir_name: &str) -> Self {
        let build_path = root.join(build_dir_name);
        Self { root, build_dir_name: build_dir_name.to_string(), build_path }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_dir_name(&self) -> &str {
        &self.build_dir_name
    }

    pub fn build_path(&self) -> &Path {
        &self.build_path
    }
}

/// Resolve `root` against `cwd` and canonicalize it.
///
/// The result is absolute no matter where the process was started.
pub fn resolve_root(root: &Path, cwd: &Path) -> Result<PathBuf, AppError> {
    let joined = if root.is_absolute() { root.to_path_buf() } else { cwd.join(root) };
    let canonical = joined
        .canonicalize()
        .map_err(|e| AppError::InvalidRoot(format!("{}: {}", joined.display(), e)))?;
    if !canonical.is_dir() {
        return Err(AppError::InvalidRoot(format!("{} is not a directory", canonical.display())));
    }
    Ok(canonical)
}

/// Build directory names must stay inside the root.
pub fn validate_build_dir_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::config_error("Build directory name must not be empty"));
    }
    let path = Path::new(name);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AppError::config_error(format!(
            "Build directory '{}' must be a relative path inside the source directory",
            name
        )));
    }
    Ok(())
}
