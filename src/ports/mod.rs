mod process_runner;
mod project_filesystem;

pub use process_runner::ProcessRunner;
pub use project_filesystem::{ProjectFilesystem, Removal};
