pub mod config;
pub mod error;
pub mod files;
pub mod invocation;
pub mod operation;

pub use config::{ArchiveConfig, ProjectConfig, ProjectSection, ToolsConfig};
pub use error::AppError;
pub use files::DiscoveredFileSet;
pub use invocation::{LaunchMode, ToolExit, ToolInvocation};
pub use operation::{Operation, OperationPlan};
