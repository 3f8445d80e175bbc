use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Default external tool names, each replaced by a logging shell script.
pub(crate) const TOOLS: [&str; 5] = ["pdflatex", "bibtex", "pandoc", "okular", "git"];

/// Shell-script stand-ins for the document toolchain.
///
/// Every script appends one line, `<name> <args...>`, to a shared log and
/// exits with its configured code. The fake compiler also writes the files a
/// real `pdflatex <project>` run leaves behind.
pub(crate) struct FakeTools {
    bin_dir: PathBuf,
    log_file: PathBuf,
}

impl FakeTools {
    pub(crate) fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin dir");
        let log_file = root.join("tools.log");

        let tools = Self { bin_dir, log_file };
        for name in TOOLS {
            tools.set_exit_code(name, 0);
        }
        tools
    }

    pub(crate) fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Rewrite a tool so it exits with `code`.
    pub(crate) fn set_exit_code(&self, name: &str, code: i32) {
        let extra =
            if name == "pdflatex" { "touch \"$1.aux\" \"$1.log\" \"$1.pdf\"\n" } else { "" };
        write_script(&self.bin_dir.join(name), &self.log_file, extra, code);
    }

    /// Install the encoding fix-up script at `<work_dir>/helpers/fix_umlaute.sh`.
    pub(crate) fn install_fixup(&self, work_dir: &Path) {
        let helpers = work_dir.join("helpers");
        fs::create_dir_all(&helpers).expect("Failed to create helpers dir");
        write_script(&helpers.join("fix_umlaute.sh"), &self.log_file, "", 0);
    }

    /// Logged invocations, one `<name> <args...>` string per call.
    pub(crate) fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log_file) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Poll until at least `count` invocations are logged (detached launches).
    pub(crate) fn wait_for_calls(&self, count: usize) -> Vec<String> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let calls = self.calls();
            if calls.len() >= count || Instant::now() >= deadline {
                return calls;
            }
            thread::sleep(Duration::from_millis(25));
        }
    }
}

fn write_script(path: &Path, log_file: &Path, extra: &str, code: i32) {
    let content = format!(
        r#"#!/bin/sh
line="$(basename "$0")"
for arg in "$@"; do
    line="$line $arg"
done
echo "$line" >> "{log}"
{extra}exit {code}
"#,
        log = log_file.display(),
        extra = extra,
        code = code,
    );
    fs::write(path, content).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path).expect("Failed to stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod fake tool");
}
