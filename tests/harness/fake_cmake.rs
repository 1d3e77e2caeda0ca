use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A `cmake` stand-in placed on `PATH` that logs its arguments and exits with scripted codes.
pub struct FakeCmake {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeCmake {
    /// Both steps succeed.
    pub fn new() -> Self {
        Self::with_exit_codes(0, 0)
    }

    /// Configure and build exit with the given codes.
    pub fn with_exit_codes(configure_exit: i32, build_exit: i32) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake cmake");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("cmake.log");

        // Configure is `-S <src> -B <build>`; build is `--build <build>`.
        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"

if [ "$1" = "--build" ]; then
    echo "fake cmake: building $2"
    if [ {build_exit} -eq 0 ]; then
        touch "$2/built.stamp"
    else
        echo "fake cmake: build error" >&2
    fi
    exit {build_exit}
fi

echo "fake cmake: configuring $2 into $4"
if [ {configure_exit} -eq 0 ]; then
    touch "$4/CMakeCache.txt"
else
    echo "CMake Error: fake configure failure" >&2
fi
exit {configure_exit}
"#,
            log = log_file.to_string_lossy(),
            configure_exit = configure_exit,
            build_exit = build_exit,
        );

        let script_path = bin_dir.join("cmake");
        fs::write(&script_path, script_content).expect("Failed to write cmake script");

        let mut perms = fs::metadata(&script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

        Self { root, bin_dir, log_file }
    }

    /// Absolute path of the fake executable.
    pub fn program(&self) -> PathBuf {
        self.bin_dir.join("cmake")
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// One entry per invocation, in call order.
    pub fn invocations(&self) -> Vec<String> {
        self.get_log().lines().map(str::to_string).collect()
    }
}
