use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig, ToolInvocation};
use crate::ports::{ProcessRunner, ProjectFilesystem};

pub fn invocation(config: &ProjectConfig) -> ToolInvocation {
    ToolInvocation::new(&config.tools.viewer).path_arg(config.pdf_path())
}

/// Launch the viewer without waiting for it to close.
pub fn execute<R, F>(ctx: &AppContext<R, F>) -> Result<(), AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    let invocation = invocation(ctx.config());
    tracing::info!(command = %invocation, "launching viewer");
    ctx.runner().spawn_detached(&invocation)
}
