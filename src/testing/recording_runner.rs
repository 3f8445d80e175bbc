//! Test double for `ProcessRunner`.

use std::collections::{HashMap, HashSet};
use std::io;

use crate::domain::{AppError, LaunchMode, ToolExit, ToolInvocation};
use crate::ports::ProcessRunner;

use super::journal::{Event, Journal};

/// Records every launch instead of spawning processes.
///
/// Programs exit with 0 unless given a code via `with_exit_code`; programs
/// registered with `with_unlaunchable` fail to start.
#[derive(Debug, Clone)]
pub struct RecordingProcessRunner {
    journal: Journal,
    exit_codes: HashMap<String, i32>,
    unlaunchable: HashSet<String>,
}

impl RecordingProcessRunner {
    pub fn new(journal: Journal) -> Self {
        Self { journal, exit_codes: HashMap::new(), unlaunchable: HashSet::new() }
    }

    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    pub fn with_unlaunchable(mut self, program: &str) -> Self {
        self.unlaunchable.insert(program.to_string());
        self
    }

    fn launch(&self, mode: LaunchMode, invocation: &ToolInvocation) -> Result<(), AppError> {
        if self.unlaunchable.contains(invocation.program()) {
            return Err(AppError::ToolLaunch {
                command: invocation.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            });
        }
        self.journal.push(Event::Launched { mode, invocation: invocation.clone() });
        Ok(())
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolExit, AppError> {
        self.launch(LaunchMode::Blocking, invocation)?;
        let code = self.exit_codes.get(invocation.program()).copied().unwrap_or(0);
        Ok(ToolExit::with_code(code))
    }

    fn spawn_detached(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        self.launch(LaunchMode::Detached, invocation)
    }
}
