use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ProjectFilesystem, Removal};

/// Filesystem-backed project directory.
#[derive(Debug, Clone)]
pub struct LocalProjectFilesystem {
    root: PathBuf,
}

impl LocalProjectFilesystem {
    /// Create a project filesystem for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ProjectFilesystem for LocalProjectFilesystem {
    fn list_files(&self) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            // Non-UTF-8 names can never match a project naming convention.
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => tracing::debug!(name = ?name, "skipping non-UTF-8 file name"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.root.join(path))?)
    }

    fn remove_if_exists(&self, path: &Path) -> Result<Removal, AppError> {
        match fs::remove_file(self.root.join(path)) {
            Ok(()) => Ok(Removal::Removed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::Absent),
            Err(source) => Err(AppError::Delete { path: path.to_path_buf(), source }),
        }
    }
}
