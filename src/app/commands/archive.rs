use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig, ToolInvocation};
use crate::ports::{ProcessRunner, ProjectFilesystem};

use super::tool::{StepReport, run_blocking};

/// `git archive <branch> --format zip --output <file>`
pub fn invocation(config: &ProjectConfig) -> ToolInvocation {
    ToolInvocation::new(&config.tools.vcs)
        .arg("archive")
        .arg(&config.archive.branch)
        .args(["--format", "zip", "--output"])
        .path_arg(&config.archive.output)
}

pub fn execute<R, F>(ctx: &AppContext<R, F>) -> Result<StepReport, AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    run_blocking(ctx.runner(), &invocation(ctx.config()))
}
