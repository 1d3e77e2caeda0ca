//! cmbuild: configure and build a CMake project into a fixed build directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{BuildOptions, BuildOutcome, build, build_from, build_with};
pub use domain::{AppError, BuildLayout, BuildStep, ToolInvocation};
