//! Removal of compiler intermediates and generated outputs.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, DiscoveredFileSet};
use crate::ports::{ProcessRunner, ProjectFilesystem, Removal};

/// What a clean pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Paths that existed and were deleted, in deletion order.
    pub removed: Vec<PathBuf>,
    /// Number of targets that did not exist.
    pub absent: usize,
}

/// Discover the working directory and compute the paths a clean would delete.
pub fn targets<R, F>(ctx: &AppContext<R, F>) -> Result<Vec<PathBuf>, AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    let entries = ctx.filesystem().list_files()?;
    let files = DiscoveredFileSet::from_entries(ctx.config(), entries);
    tracing::debug!(sources = files.sources().len(), "discovered sources");
    Ok(files.clean_targets(ctx.config()))
}

/// Delete every clean target. Missing targets are skipped; any other
/// deletion failure stops the pass.
pub fn execute<R, F>(ctx: &AppContext<R, F>) -> Result<CleanSummary, AppError>
where
    R: ProcessRunner,
    F: ProjectFilesystem,
{
    let mut summary = CleanSummary::default();

    for path in targets(ctx)? {
        match ctx.filesystem().remove_if_exists(&path)? {
            Removal::Removed => {
                tracing::debug!(path = %path.display(), "removed");
                summary.removed.push(path);
            }
            Removal::Absent => {
                tracing::trace!(path = %path.display(), "absent");
                summary.absent += 1;
            }
        }
    }

    tracing::info!(removed = summary.removed.len(), absent = summary.absent, "cleaned");
    Ok(summary)
}
