//! Project-directory filesystem operations.
//!
//! This port lists, reads, and deletes. Naming conventions for what to delete
//! belong to the domain (`DiscoveredFileSet`).

use std::path::Path;

use crate::domain::AppError;

/// Result of a delete-if-exists call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    Absent,
}

/// Port for filesystem access scoped to the project directory.
///
/// All `path` arguments are relative to the project root.
pub trait ProjectFilesystem {
    /// Names of the regular files directly inside the project root.
    fn list_files(&self) -> Result<Vec<String>, AppError>;

    /// Whether `path` is an existing regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Remove a file. A missing file yields `Removal::Absent`; every other
    /// failure is returned as `AppError::Delete`.
    fn remove_if_exists(&self, path: &Path) -> Result<Removal, AppError>;
}
