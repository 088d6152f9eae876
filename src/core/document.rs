//! Output document I/O.
//!
//! Paths are always resolved to absolute form and passed explicitly; the
//! process working directory is never changed. The document is opened in
//! append mode and is not locked, so concurrent runs against the same file
//! from several processes can interleave their sections.

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::{
    declaration::{SourceIndex, index_source},
    emit::{EmitOptions, write_section},
    error::{GenerateError, GenerateResult},
};

/// What happened to a pre-existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    NotFound,
}

/// Delete a stale output document before a fresh run.
///
/// A missing file is fine. Any other failure (permissions, the path being a
/// directory) is reported.
pub fn remove_stale_output(path: &Path) -> GenerateResult<RemovalOutcome> {
    match fs::remove_file(path) {
        Ok(()) => Ok(RemovalOutcome::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RemovalOutcome::NotFound),
        Err(source) => Err(GenerateError::StaleOutputRemoval {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Outcome of appending one source file's section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendSummary {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub index: SourceIndex,
    /// True if the document was empty and got the top-level header.
    pub wrote_main_header: bool,
}

/// Read `source_dir/source_name`, index its declarations and append the
/// section to `output_dir/options.output_name`.
pub fn append_api_reference(
    source_dir: &Path,
    output_dir: &Path,
    source_name: &str,
    options: &EmitOptions,
) -> GenerateResult<AppendSummary> {
    let source_path = resolve_source_path(source_dir, source_name)?;
    let text = fs::read_to_string(&source_path).map_err(|source| {
        GenerateError::MissingSourceFile {
            path: source_path.clone(),
            source,
        }
    })?;
    let index = index_source(&text);

    let output_path = resolve_output_path(output_dir, &options.output_name)?;
    let write_failure = |source| GenerateError::OutputWriteFailure {
        path: output_path.clone(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&output_path)
        .map_err(write_failure)?;
    let wrote_main_header = file.metadata().map_err(write_failure)?.len() == 0;

    let mut writer = BufWriter::new(file);
    write_section(
        &mut writer,
        source_name,
        &index,
        options,
        wrote_main_header,
    )
    .and_then(|()| writer.flush())
    .map_err(write_failure)?;

    Ok(AppendSummary {
        source_path,
        output_path,
        index,
        wrote_main_header,
    })
}

/// True if the document at `path` is missing or zero bytes long, i.e. the
/// next append would start with the top-level header. Any failure other than
/// the file not existing is reported.
pub fn needs_main_header(path: &Path) -> GenerateResult<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len() == 0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(source) => Err(GenerateError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn resolve_source_path(source_dir: &Path, source_name: &str) -> GenerateResult<PathBuf> {
    let joined = source_dir.join(source_name);
    std::path::absolute(&joined)
        .map_err(|source| GenerateError::MissingSourceFile { path: joined, source })
}

pub fn resolve_output_path(output_dir: &Path, output_name: &str) -> GenerateResult<PathBuf> {
    let joined = output_dir.join(output_name);
    std::path::absolute(&joined)
        .map_err(|source| GenerateError::OutputWriteFailure { path: joined, source })
}
