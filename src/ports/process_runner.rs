use crate::domain::{AppError, ToolExit, ToolInvocation};

/// Port for launching external programs in the project directory.
///
/// Children inherit stdin/stdout/stderr so tool output reaches the user
/// unchanged. An `Err` means the program could not be started at all; a
/// program that starts and fails is reported through [`ToolExit`].
pub trait ProcessRunner {
    /// Spawn the program and block until it exits.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolExit, AppError>;

    /// Spawn the program and return immediately without waiting for it.
    fn spawn_detached(&self, invocation: &ToolInvocation) -> Result<(), AppError>;
}
