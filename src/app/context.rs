use crate::domain::ProjectConfig;
use crate::ports::{ProcessRunner, ProjectFilesystem};

/// Application context holding configuration and dependencies for operations.
pub struct AppContext<R: ProcessRunner, F: ProjectFilesystem> {
    config: ProjectConfig,
    runner: R,
    filesystem: F,
}

impl<R: ProcessRunner, F: ProjectFilesystem> AppContext<R, F> {
    /// Create a new application context.
    pub fn new(config: ProjectConfig, runner: R, filesystem: F) -> Self {
        Self { config, runner, filesystem }
    }

    /// Get the immutable project configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
