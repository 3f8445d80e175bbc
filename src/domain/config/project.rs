//! Project configuration domain models.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::files::{DOCX_EXTENSION, PDF_EXTENSION, SOURCE_EXTENSION};

/// Immutable project configuration, resolved once at startup.
///
/// The defaults reproduce the fixed conventions (`doc.tex`, `pdflatex`,
/// `bibtex`, `pandoc`, `okular`, `git archive master`). A `docbuild.toml`
/// may rename any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project naming.
    #[serde(default)]
    pub project: ProjectSection,
    /// External tool names.
    #[serde(default)]
    pub tools: ToolsConfig,
    /// Version-control archive settings.
    #[serde(default)]
    pub archive: ArchiveConfig,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.project.validate()?;
        self.tools.validate()?;
        self.archive.validate()?;
        Ok(())
    }

    /// Project base name, e.g. `doc`.
    pub fn name(&self) -> &str {
        &self.project.name
    }

    /// Primary source file, `<project>.tex`.
    pub fn source_path(&self) -> PathBuf {
        self.with_extension(SOURCE_EXTENSION)
    }

    /// Compiled output, `<project>.pdf`.
    pub fn pdf_path(&self) -> PathBuf {
        self.with_extension(PDF_EXTENSION)
    }

    /// Converted output, `<project>.docx`.
    pub fn docx_path(&self) -> PathBuf {
        self.with_extension(DOCX_EXTENSION)
    }

    fn with_extension(&self, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.project.name, extension))
    }
}

/// Project naming.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Base name shared by the primary source and every derived artifact.
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self { name: default_project_name() }
    }
}

impl ProjectSection {
    pub fn validate(&self) -> Result<(), AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::config_error("project.name must not be empty"));
        }
        if name != self.name {
            return Err(AppError::config_error(
                "project.name must not have leading or trailing whitespace",
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(AppError::config_error(format!(
                "project.name '{}' must be a bare name, not a path",
                name
            )));
        }
        if name.ends_with(SOURCE_EXTENSION) {
            return Err(AppError::config_error(format!(
                "project.name '{}' must not include the {} extension",
                name, SOURCE_EXTENSION
            )));
        }
        Ok(())
    }
}

/// Names of the external programs the orchestrator invokes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// LaTeX compiler, invoked with the project base name.
    #[serde(default = "default_pdf_compiler")]
    pub pdf_compiler: String,
    /// Bibliography tool, invoked with the project base name.
    #[serde(default = "default_bibliography")]
    pub bibliography: String,
    /// Document converter producing the DOCX output.
    #[serde(default = "default_converter")]
    pub converter: String,
    /// PDF viewer.
    #[serde(default = "default_viewer")]
    pub viewer: String,
    /// Script that repairs converter encoding artifacts in the DOCX output.
    #[serde(default = "default_fixup_script")]
    pub fixup_script: String,
    /// Version-control tool used to export the archive.
    #[serde(default = "default_vcs")]
    pub vcs: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            pdf_compiler: default_pdf_compiler(),
            bibliography: default_bibliography(),
            converter: default_converter(),
            viewer: default_viewer(),
            fixup_script: default_fixup_script(),
            vcs: default_vcs(),
        }
    }
}

impl ToolsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("pdf_compiler", &self.pdf_compiler),
            ("bibliography", &self.bibliography),
            ("converter", &self.converter),
            ("viewer", &self.viewer),
            ("fixup_script", &self.fixup_script),
            ("vcs", &self.vcs),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("tools.{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

/// Settings for `git archive`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Branch whose tracked tree is exported.
    #[serde(default = "default_archive_branch")]
    pub branch: String,
    /// Zip file written in the working directory.
    #[serde(default = "default_archive_output")]
    pub output: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { branch: default_archive_branch(), output: default_archive_output() }
    }
}

impl ArchiveConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.branch.trim().is_empty() {
            return Err(AppError::config_error("archive.branch must not be empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(AppError::config_error("archive.output must not be empty"));
        }
        Ok(())
    }
}

fn default_project_name() -> String {
    "doc".to_string()
}

fn default_pdf_compiler() -> String {
    "pdflatex".to_string()
}

fn default_bibliography() -> String {
    "bibtex".to_string()
}

fn default_converter() -> String {
    "pandoc".to_string()
}

fn default_viewer() -> String {
    "okular".to_string()
}

fn default_fixup_script() -> String {
    "./helpers/fix_umlaute.sh".to_string()
}

fn default_vcs() -> String {
    "git".to_string()
}

fn default_archive_branch() -> String {
    "master".to_string()
}

fn default_archive_output() -> PathBuf {
    PathBuf::from("efsdoc.zip")
}
