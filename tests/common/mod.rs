#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the opq-lint binary.
#[macro_export]
macro_rules! opq_lint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("opq-lint"))
    };
}

/// Top-of-file delimiter line expected by the header rule.
pub const DELIMITER: &str = "-- ------------------------------------------------------------------------------------------------------------";

/// Creates a temporary repository layout for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the canonical repo root as a string argument.
    pub fn root_arg(&self) -> String {
        dunce_path(self.path())
    }

    /// Creates an opq-lint config file at the repository root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".opq-lint.toml", content);
    }

    /// Creates a fully documented RTL file with `processes` labeled processes.
    pub fn create_clean_rtl(&self, relative_path: &str, processes: usize) {
        self.create_file(relative_path, &clean_rtl(processes));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn dunce_path(path: &Path) -> String {
    dunce::canonicalize(path)
        .expect("Failed to canonicalize temp directory")
        .to_string_lossy()
        .into_owned()
}

/// A header block followed by documented processes.
pub fn clean_rtl(processes: usize) -> String {
    let mut content = format!(
        "{DELIMITER}\n\
         -- IP Name:     opq_stage\n\
         -- Author:      OPQ maintainers\n\
         -- Revision:    1.0\n\
         -- Description: Test stage\n\
         {DELIMITER}\n\
         library ieee;\n\
         use ieee.std_logic_1164.all;\n\n\
         architecture rtl of opq_stage is\n\
         begin\n"
    );
    for i in 0..processes {
        let _ = writeln!(content, "    -- @name proc_stage_{i}");
        let _ = writeln!(content, "    -- @brief Stage {i} register");
        let _ = writeln!(content, "    proc_stage_{i} : process (clk)");
        let _ = writeln!(content, "    begin");
        let _ = writeln!(content, "    end process;");
        content.push('\n');
    }
    content.push_str("end architecture;\n");
    content
}
