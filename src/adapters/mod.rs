pub mod build_tool_command;

pub use build_tool_command::BuildToolCommandAdapter;
