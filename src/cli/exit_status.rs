use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but refused to act (e.g. config already exists)
/// - `Error` (2): Command failed (missing source file, unwritable output, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
