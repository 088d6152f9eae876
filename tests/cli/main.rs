use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

/// Snapshot a command run, with the temp project root shown as `[TEMP]`.
macro_rules! assert_cli_snapshot {
    ($test:expr, $cmd:expr) => {{
        let root = regex::escape(&$test.root().to_string_lossy());
        insta::with_settings!({filters => vec![(root.as_str(), "[TEMP]")]}, {
            insta_cmd::assert_cmd_snapshot!($cmd);
        });
    }};
}

mod generate;

const BIN_NAME: &str = "genapi";

pub const GEOMETRY_PY: &str = r#"import numpy as np
from phidl.device_layout import Device, Port

def _hidden(a): pass
class Zed(object):
    pass
def f(x): pass
def a(x): pass
class Gee:
    pass
class Bee:
    pass
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        fs::create_dir_all(project_dir.join("docs/source"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Project with `phidl/geometry.py` in place.
    pub fn with_geometry() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("phidl/geometry.py", GEOMETRY_PY)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn api_rst(&self) -> Result<String> {
        self.read_file("docs/source/API.rst")
    }
}

/// Section titles underlined with `=`, in document order.
pub fn entry_names(doc: &str) -> Vec<String> {
    let lines: Vec<&str> = doc.lines().collect();
    lines
        .windows(2)
        .filter(|w| !w[0].is_empty() && !w[1].is_empty() && w[1].chars().all(|c| c == '='))
        .map(|w| w[0].to_string())
        .collect()
}
