//! docbuild: build, clean, view, and package a single-project LaTeX document
//! by orchestrating external toolchain programs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

use adapters::{CommandProcessRunner, LocalProjectFilesystem};
use app::AppContext;
use app::commands;

pub use app::commands::{CleanSummary, OperationOutcome, StepReport};
pub use domain::{AppError, Operation, OperationPlan, ProjectConfig};

/// Context over the real filesystem and process table, rooted at `root`.
pub fn context_in(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<AppContext<CommandProcessRunner, LocalProjectFilesystem>, AppError> {
    let filesystem = LocalProjectFilesystem::new(root.to_path_buf());
    let config = app::config::load_config(&filesystem, config_path)?;
    Ok(AppContext::new(config, CommandProcessRunner::new(root.to_path_buf()), filesystem))
}

/// Execute `plan` in the current directory.
///
/// Operations run in declared order; `on_complete` sees each outcome as it
/// finishes. The first orchestrator error (a tool that cannot be launched, a
/// deletion failure) stops the run. Tools that exit unsuccessfully do not.
pub fn run(
    plan: &OperationPlan,
    config_path: Option<&Path>,
    on_complete: impl FnMut(Operation, &OperationOutcome),
) -> Result<(), AppError> {
    if plan.is_empty() {
        return Ok(());
    }
    let root = std::env::current_dir()?;
    let ctx = context_in(&root, config_path)?;
    tracing::debug!(operations = plan.len(), root = %root.display(), "running plan");
    commands::execute_plan(&ctx, plan, on_complete)
}
