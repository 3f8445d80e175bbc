pub mod parse;
pub mod paths;
pub mod project;

pub use parse::parse_config_content;
pub use project::{ArchiveConfig, ProjectConfig, ProjectSection, ToolsConfig};
