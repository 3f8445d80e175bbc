use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::{AppError, ToolExit, ToolInvocation};
use crate::ports::ProcessRunner;

/// `std::process::Command` runner rooted at the project directory.
#[derive(Debug, Clone)]
pub struct CommandProcessRunner {
    root: PathBuf,
}

impl CommandProcessRunner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn command(&self, invocation: &ToolInvocation) -> Command {
        let mut command = Command::new(self.resolve_program(invocation.program()));
        command.args(invocation.os_args());
        command.current_dir(&self.root);
        command
    }

    /// Relative program paths such as `./helpers/fix.sh` resolve against the
    /// project root; bare names go through `PATH`.
    fn resolve_program(&self, program: &str) -> PathBuf {
        let path = Path::new(program);
        if path.is_relative() && path.components().count() > 1 {
            self.root.join(path)
        } else {
            path.to_path_buf()
        }
    }

    fn launch_error(invocation: &ToolInvocation, source: std::io::Error) -> AppError {
        AppError::ToolLaunch { command: invocation.to_string(), source }
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolExit, AppError> {
        let status = self
            .command(invocation)
            .status()
            .map_err(|e| Self::launch_error(invocation, e))?;

        Ok(ToolExit { code: status.code() })
    }

    fn spawn_detached(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        // The child handle is dropped without waiting; the viewer keeps running.
        self.command(invocation)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| Self::launch_error(invocation, e))?;
        Ok(())
    }
}
