use crate::domain::{BuildConfig, BuildLayout};
use crate::ports::BuildToolPort;

/// Application context holding dependencies for command execution.
pub struct AppContext<T: BuildToolPort> {
    layout: BuildLayout,
    config: BuildConfig,
    tool: T,
}

impl<T: BuildToolPort> AppContext<T> {
    /// Create a new application context.
    pub fn new(layout: BuildLayout, config: BuildConfig, tool: T) -> Self {
        Self { layout, config, tool }
    }

    /// Resolved root and build directory.
    pub fn layout(&self) -> &BuildLayout {
        &self.layout
    }

    /// Loaded configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Get a reference to the build tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }
}
