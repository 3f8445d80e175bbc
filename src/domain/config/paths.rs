use std::path::Path;

/// Optional per-project config file name.
pub const CONFIG_FILE: &str = "docbuild.toml";

/// `docbuild.toml`, relative to the project root.
pub fn config() -> &'static Path {
    Path::new(CONFIG_FILE)
}
