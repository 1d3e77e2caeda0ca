use crate::domain::{AppError, ToolInvocation};

pub trait BuildToolPort {
    /// Run the invocation to completion, blocking until the tool exits.
    ///
    /// Returns `AppError::ExternalToolFailure` when the tool exits unsuccessfully.
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError>;
}

impl<T: BuildToolPort + ?Sized> BuildToolPort for &T {
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        (**self).run(invocation)
    }
}
