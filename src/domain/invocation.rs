//! Build steps and the tool invocations they translate to.

use std::ffi::OsString;
use std::fmt;

use super::BuildLayout;

/// One of the two external steps, always run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    /// Generate build metadata in the build directory.
    Configure,
    /// Compile using the previously configured build directory.
    Build,
}

impl BuildStep {
    /// Steps in execution order.
    pub const ORDERED: [BuildStep; 2] = [BuildStep::Configure, BuildStep::Build];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStep::Configure => "configure",
            BuildStep::Build => "build",
        }
    }

    /// Translate this step into a concrete command line for the given layout.
    pub fn invocation(&self, program: &str, layout: &BuildLayout) -> ToolInvocation {
        let args: Vec<OsString> = match self {
            BuildStep::Configure => vec![
                "-S".into(),
                layout.root().as_os_str().to_owned(),
                "-B".into(),
                layout.build_path().as_os_str().to_owned(),
            ],
            BuildStep::Build => {
                vec!["--build".into(), layout.build_path().as_os_str().to_owned()]
            }
        };
        ToolInvocation { step: *self, program: program.to_string(), args }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A program plus its argument vector. Pure data; running it is the port's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub step: BuildStep,
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    /// Shell-like rendering for logs.
    pub fn display_command(&self) -> String {
        let mut rendered = self.program.clone();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(&arg.to_string_lossy());
        }
        rendered
    }
}
