//! Build artifact naming conventions.
//!
//! Every path here is derived by string substitution on file names. File
//! contents are never inspected.

use std::path::PathBuf;

use crate::domain::ProjectConfig;

/// LaTeX source extension.
pub const SOURCE_EXTENSION: &str = ".tex";

/// Per-source auxiliary file emitted by the compiler.
pub const AUX_EXTENSION: &str = ".aux";

/// Compiled output extension.
pub const PDF_EXTENSION: &str = ".pdf";

/// Converted output extension.
pub const DOCX_EXTENSION: &str = ".docx";

/// Project-level intermediates, appended to the project base name.
///
/// Covers the bibliography backend (`.bbl`, `.blg`, `-blx.bib`, `.run.xml`),
/// the compiler log, the table of contents, the list of figures, and the
/// hyperref outline.
pub const INTERMEDIATE_SUFFIXES: [&str; 8] =
    [".bbl", ".blg", "-blx.bib", ".lof", ".log", ".out", ".run.xml", ".toc"];

/// Source files found in the working directory plus the artifacts derived from them.
///
/// Computed fresh for every operation that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFileSet {
    sources: Vec<PathBuf>,
    auxiliary: Vec<PathBuf>,
    intermediates: Vec<PathBuf>,
}

impl DiscoveredFileSet {
    /// Derive the file set from the names of the files in the working directory.
    pub fn from_entries<I, S>(config: &ProjectConfig, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stems: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| {
                entry.as_ref().strip_suffix(SOURCE_EXTENSION).map(|stem| stem.to_string())
            })
            .collect();
        stems.sort();
        stems.dedup();

        let sources =
            stems.iter().map(|stem| PathBuf::from(format!("{stem}{SOURCE_EXTENSION}"))).collect();
        let auxiliary =
            stems.iter().map(|stem| PathBuf::from(format!("{stem}{AUX_EXTENSION}"))).collect();

        Self { sources, auxiliary, intermediates: intermediate_paths(config.name()) }
    }

    /// Every `.tex` file found.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// One `.aux` path per discovered source.
    pub fn auxiliary(&self) -> &[PathBuf] {
        &self.auxiliary
    }

    /// Fixed project-level intermediate artifacts.
    pub fn intermediates(&self) -> &[PathBuf] {
        &self.intermediates
    }

    /// Paths removed by `clean`: auxiliary files, intermediates, then both outputs.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn clean_targets(&self, config: &ProjectConfig) -> Vec<PathBuf> {
        let outputs = [config.pdf_path(), config.docx_path()];
        let mut targets: Vec<PathBuf> = Vec::new();
        for path in self.auxiliary.iter().chain(self.intermediates.iter()).chain(outputs.iter()) {
            if !targets.contains(path) {
                targets.push(path.clone());
            }
        }
        targets
    }
}

/// Intermediate artifact paths for a project base name.
pub fn intermediate_paths(project: &str) -> Vec<PathBuf> {
    INTERMEDIATE_SUFFIXES.iter().map(|suffix| PathBuf::from(format!("{project}{suffix}"))).collect()
}
