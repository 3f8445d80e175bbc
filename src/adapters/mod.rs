pub mod process_command;
pub mod project_filesystem;

pub use process_command::CommandProcessRunner;
pub use project_filesystem::LocalProjectFilesystem;
