//! PDF build: clean, then compile / bibliography / compile / compile.
//!
//! The first compile emits citation keys, the bibliography pass resolves them,
//! and two further compiles settle cross-references and the table of contents.
//! No pass gates the next.

use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig, ToolInvocation};
use crate::ports::{ProcessRunner, ProjectFilesystem};

use super::clean;
use super::tool::{StepReport, run_blocking};

/// The four tool passes, in order.
pub fn invocations(config: &ProjectConfig) -> [ToolInvocation; 4] {
    let compile = || ToolInvocation::new(&config.tools.pdf_compiler).arg(config.name());
    let bibliography = ToolInvocation::new(&config.tools.bibliography).arg(config.name());
    [compile(), bibliography, compile(), compile()]
}

pub fn execute<R, F>(ctx: &AppContext<R, F>) -> Result<Vec<StepReport>, AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    clean::execute(ctx)?;

    let mut reports = Vec::with_capacity(4);
    for invocation in invocations(ctx.config()) {
        reports.push(run_blocking(ctx.runner(), &invocation)?);
    }
    Ok(reports)
}
