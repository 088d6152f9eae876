use std::path::PathBuf;

use crate::core::GenerateSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Generate,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Preview(PreviewSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct PreviewSummary {
    pub output_path: PathBuf,
    pub rendered: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False if a config file already existed and nothing was written.
    pub created: bool,
}

/// Result of running genapi commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Number of problems that should fail the run (exit code 1).
    pub error_count: usize,
}
