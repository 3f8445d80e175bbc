pub mod archive;
pub mod build_docx;
pub mod build_pdf;
pub mod clean;
mod tool;
pub mod view;

pub use clean::CleanSummary;
pub use tool::StepReport;

use crate::app::AppContext;
use crate::domain::{AppError, Operation, OperationPlan};
use crate::ports::{ProcessRunner, ProjectFilesystem};

/// Result of one executed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Blocking tool steps ran; failed exit statuses are recorded, not raised.
    Steps(Vec<StepReport>),
    Cleaned(CleanSummary),
    /// A detached process was started.
    Launched,
}

impl OperationOutcome {
    /// Steps that exited unsuccessfully.
    pub fn failed_steps(&self) -> Vec<&StepReport> {
        match self {
            OperationOutcome::Steps(reports) => {
                reports.iter().filter(|report| !report.is_success()).collect()
            }
            OperationOutcome::Cleaned(_) | OperationOutcome::Launched => Vec::new(),
        }
    }
}

/// Run a single operation.
pub fn execute<R, F>(
    ctx: &AppContext<R, F>,
    operation: Operation,
) -> Result<OperationOutcome, AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    let _span = tracing::info_span!("operation", name = operation.label()).entered();
    match operation {
        Operation::BuildPdf => build_pdf::execute(ctx).map(OperationOutcome::Steps),
        Operation::BuildDocx => build_docx::execute(ctx).map(OperationOutcome::Steps),
        Operation::Clean => clean::execute(ctx).map(OperationOutcome::Cleaned),
        Operation::View => view::execute(ctx).map(|_| OperationOutcome::Launched),
        Operation::Archive => {
            archive::execute(ctx).map(|report| OperationOutcome::Steps(vec![report]))
        }
    }
}

/// Run every operation in `plan`, in declared order, stopping at the first error.
pub fn execute_plan<R, F>(
    ctx: &AppContext<R, F>,
    plan: &OperationPlan,
    mut on_complete: impl FnMut(Operation, &OperationOutcome),
) -> Result<(), AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    for operation in plan.iter() {
        let outcome = execute(ctx, operation)?;
        on_complete(operation, &outcome);
    }
    Ok(())
}
