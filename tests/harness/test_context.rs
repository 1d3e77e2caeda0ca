//! Shared testing harness for `cmbuild` integration tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeCmake;

/// Isolated project checkout plus a fake `cmake` on `PATH`.
pub(crate) struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
    cmake: FakeCmake,
}

impl TestContext {
    /// A project whose configure and build steps both succeed.
    pub(crate) fn new() -> Self {
        Self::with_cmake(FakeCmake::new())
    }

    /// A project driven by the given fake cmake.
    pub(crate) fn with_cmake(cmake: FakeCmake) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create project directory");
        fs::write(
            project_dir.join("CMakeLists.txt"),
            "cmake_minimum_required(VERSION 3.16)\nproject(demo C)\n",
        )
        .expect("Failed to write CMakeLists.txt");

        Self { root, project_dir, cmake }
    }

    /// Directory containing the temp project; a convenient cwd outside the project.
    pub(crate) fn outer_dir(&self) -> &Path {
        self.root.path()
    }

    /// Project source directory as created (not canonicalized).
    pub(crate) fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Canonical project root, as cmbuild is expected to report it.
    pub(crate) fn canonical_root(&self) -> PathBuf {
        self.project_dir.canonicalize().expect("Failed to canonicalize project dir")
    }

    /// Canonical default build directory.
    pub(crate) fn build_path(&self) -> PathBuf {
        self.canonical_root().join("build")
    }

    pub(crate) fn cmake(&self) -> &FakeCmake {
        &self.cmake
    }

    /// Command for the compiled binary, run from the outer directory with `-S project`.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_in(self.outer_dir());
        cmd.args(["-S", "project"]);
        cmd
    }

    /// Command for the compiled binary in `dir`, with no source dir argument.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("cmbuild").expect("Failed to locate cmbuild binary");
        cmd.current_dir(dir.as_ref())
            .env("PATH", self.path_with_fake_cmake())
            .env_remove("CMBUILD_SOURCE_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `cmbuild.toml` at the project root.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.project_dir.join("cmbuild.toml"), content)
            .expect("Failed to write cmbuild.toml");
    }

    fn path_with_fake_cmake(&self) -> std::ffi::OsString {
        let existing = env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.cmake.bin_dir.clone()];
        paths.extend(env::split_paths(&existing));
        env::join_paths(paths).expect("Failed to join PATH")
    }
}
