//! DOCX conversion followed by the encoding fix-up script.

use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig, ToolInvocation};
use crate::ports::{ProcessRunner, ProjectFilesystem};

use super::tool::{StepReport, run_blocking};

/// Converter call then fix-up call. The fix-up runs unconditionally.
pub fn invocations(config: &ProjectConfig) -> [ToolInvocation; 2] {
    let convert = ToolInvocation::new(&config.tools.converter)
        .arg("-s")
        .path_arg(config.source_path())
        .arg("-o")
        .path_arg(config.docx_path());
    let fixup = ToolInvocation::new(&config.tools.fixup_script);
    [convert, fixup]
}

pub fn execute<R, F>(ctx: &AppContext<R, F>) -> Result<Vec<StepReport>, AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    let mut reports = Vec::with_capacity(2);
    for invocation in invocations(ctx.config()) {
        reports.push(run_blocking(ctx.runner(), &invocation)?);
    }
    Ok(reports)
}
