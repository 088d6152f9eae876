//! Multi-source driver.
//!
//! Removes the stale document (unless appending), then appends one section
//! per source file into the same document, in the order given.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};

use super::{
    declaration::index_source,
    document::{
        AppendSummary, RemovalOutcome, append_api_reference, needs_main_header,
        remove_stale_output, resolve_output_path, resolve_source_path,
    },
    emit::{EmitOptions, render_section},
    error::{GenerateError, GenerateResult},
};

/// A full generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File names or glob patterns, relative to `source_dir`.
    pub sources: Vec<String>,
    pub options: EmitOptions,
    /// Delete an existing document before writing.
    pub fresh: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output_path: PathBuf,
    /// `None` when the run appended to an existing document.
    pub removal: Option<RemovalOutcome>,
    pub sections: Vec<AppendSummary>,
}

impl GenerateSummary {
    pub fn class_count(&self) -> usize {
        self.sections.iter().map(|s| s.index.class_count()).sum()
    }

    pub fn function_count(&self) -> usize {
        self.sections.iter().map(|s| s.index.function_count()).sum()
    }

    pub fn private_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.index.private_functions.len())
            .sum()
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Anything else is treated as a literal file name.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Expand glob entries into file names relative to `source_dir`.
///
/// Literal names pass through unchecked and in order, repeats included: a
/// missing file is reported when it is read, and a name listed twice gets two
/// sections. Matches of one pattern are sorted. A glob never repeats a file
/// that is already in the list.
pub fn expand_sources(source_dir: &Path, sources: &[String]) -> GenerateResult<Vec<String>> {
    // Glob output drops `.` components, so `./phidl` would never prefix a match.
    let base = std::path::absolute(source_dir).map_err(|source| {
        GenerateError::MissingSourceFile {
            path: source_dir.to_path_buf(),
            source,
        }
    })?;
    let mut seen = HashSet::new();
    let mut expanded = Vec::new();

    for entry in sources {
        if !is_glob_pattern(entry) {
            seen.insert(entry.clone());
            expanded.push(entry.clone());
            continue;
        }

        let escaped_dir = Pattern::escape(&base.to_string_lossy());
        let full_pattern = Path::new(&escaped_dir).join(entry);
        let paths = glob(&full_pattern.to_string_lossy()).map_err(|source| {
            GenerateError::InvalidSourcePattern {
                pattern: entry.clone(),
                source,
            }
        })?;

        let mut matches: Vec<String> = paths
            .flatten()
            .filter(|path| path.is_file())
            .filter_map(|path| {
                path.strip_prefix(&base)
                    .ok()
                    .map(|rel| rel.to_string_lossy().into_owned())
            })
            .collect();
        if matches.is_empty() {
            return Err(GenerateError::NoSourceMatch {
                pattern: entry.clone(),
            });
        }
        matches.sort();

        for name in matches {
            if seen.insert(name.clone()) {
                expanded.push(name);
            }
        }
    }

    Ok(expanded)
}

pub fn generate(request: &GenerateRequest) -> GenerateResult<GenerateSummary> {
    let sources = expand_sources(&request.source_dir, &request.sources)?;
    let output_path = resolve_output_path(&request.output_dir, &request.options.output_name)?;

    let removal = if request.fresh {
        Some(remove_stale_output(&output_path)?)
    } else {
        None
    };

    let sections = sources
        .iter()
        .map(|name| {
            append_api_reference(
                &request.source_dir,
                &request.output_dir,
                name,
                &request.options,
            )
        })
        .collect::<GenerateResult<Vec<_>>>()?;

    Ok(GenerateSummary {
        output_path,
        removal,
        sections,
    })
}

/// Render what [`generate`] would append, without touching the disk.
pub fn preview(request: &GenerateRequest) -> GenerateResult<String> {
    let sources = expand_sources(&request.source_dir, &request.sources)?;
    let output_path = resolve_output_path(&request.output_dir, &request.options.output_name)?;
    let mut with_main_header = request.fresh || needs_main_header(&output_path)?;

    let mut rendered = String::new();
    for name in &sources {
        let source_path = resolve_source_path(&request.source_dir, name)?;
        let text = fs::read_to_string(&source_path).map_err(|source| {
            GenerateError::MissingSourceFile {
                path: source_path.clone(),
                source,
            }
        })?;
        let index = index_source(&text);
        let section = render_section(name, &index, &request.options, with_main_header)
            .map_err(|source| GenerateError::OutputWriteFailure {
                path: output_path.clone(),
                source,
            })?;
        rendered.push_str(&section);
        with_main_header = false;
    }

    Ok(rendered)
}
