//! Shared testing harness for `docbuild` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tools::FakeTools;

/// Testing harness providing an isolated project directory and fake toolchain.
pub(crate) struct TestContext {
    _root: TempDir,
    work_dir: PathBuf,
    tools: FakeTools,
}

impl TestContext {
    /// Create a new isolated environment with every tool faked.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let tools = FakeTools::install(root.path());
        tools.install_fixup(&work_dir);

        Self { _root: root, work_dir, tools }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn tools(&self) -> &FakeTools {
        &self.tools
    }

    /// Build a command for the compiled `docbuild` binary with the fake tools first on `PATH`.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("docbuild").expect("Failed to locate docbuild binary");
        cmd.current_dir(&self.work_dir).env("PATH", self.search_path()).env_remove("RUST_LOG");
        cmd
    }

    fn search_path(&self) -> String {
        let inherited = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.tools.bin_dir().display(), inherited)
    }

    /// Create empty files in the project directory.
    pub(crate) fn touch(&self, names: &[&str]) {
        for name in names {
            fs::write(self.work_dir.join(name), "").expect("Failed to create project file");
        }
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("docbuild.toml"), content).expect("Failed to write config");
    }

    pub(crate) fn exists(&self, name: &str) -> bool {
        self.work_dir.join(name).exists()
    }

    /// Sorted names of the regular files in the project directory.
    pub(crate) fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}
