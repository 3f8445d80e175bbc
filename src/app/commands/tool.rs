use crate::domain::{AppError, ToolExit, ToolInvocation};
use crate::ports::ProcessRunner;

/// Exit report of one blocking step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub command: String,
    pub exit: ToolExit,
}

impl StepReport {
    pub fn is_success(&self) -> bool {
        self.exit.is_success()
    }
}

/// Run a blocking step. A failing exit status is logged and returned, never raised.
pub(crate) fn run_blocking<R: ProcessRunner>(
    runner: &R,
    invocation: &ToolInvocation,
) -> Result<StepReport, AppError> {
    tracing::info!(command = %invocation, "running");
    let exit = runner.run(invocation)?;
    if !exit.is_success() {
        match exit.code {
            Some(code) => {
                tracing::warn!(command = %invocation, code, "exited with non-zero status")
            }
            None => tracing::warn!(command = %invocation, "terminated by signal"),
        }
    }
    Ok(StepReport { command: invocation.to_string(), exit })
}
