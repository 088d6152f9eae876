use std::{io, path::PathBuf};

use thiserror::Error;

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Failures of a generation run.
///
/// None of these are retried. Writes are append-only, so a failure halfway
/// through leaves whatever was already appended in place.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The source file could not be opened or read.
    #[error("cannot read source file '{}': {source}", .path.display())]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output document could not be created or appended to.
    #[error("cannot write output file '{}': {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stale output file exists but could not be deleted.
    #[error("cannot remove stale output file '{}': {source}", .path.display())]
    StaleOutputRemoval {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source glob pattern is malformed.
    #[error("invalid source pattern '{pattern}': {source}")]
    InvalidSourcePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A source glob pattern matched no files.
    #[error("source pattern '{pattern}' did not match any file")]
    NoSourceMatch { pattern: String },
}
