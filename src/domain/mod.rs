pub mod config;
pub mod error;
pub mod invocation;
pub mod layout;

pub use config::BuildConfig;
pub use error::AppError;
pub use invocation::{BuildStep, ToolInvocation};
pub use layout::BuildLayout;
