//! Project configuration loading from the working directory.

use std::path::Path;

use crate::domain::config;
use crate::domain::{AppError, ProjectConfig};
use crate::ports::ProjectFilesystem;

/// Resolve the project configuration.
///
/// With `explicit`, that file must exist. Otherwise `docbuild.toml` in the
/// project root is read when present and the fixed conventions apply when it
/// is not.
pub fn load_config<F: ProjectFilesystem>(
    filesystem: &F,
    explicit: Option<&Path>,
) -> Result<ProjectConfig, AppError> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (config::paths::config(), false),
    };

    if !filesystem.file_exists(path) {
        if required {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(ProjectConfig::default());
    }

    tracing::debug!(path = %path.display(), "loading config");
    let content = filesystem.read_file(path)?;
    config::parse_config_content(&content)
}
