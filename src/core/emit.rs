//! Sphinx reStructuredText rendering.
//!
//! Every writer appends to `W` and never looks back at what is already
//! there. The caller decides whether the top-level header is needed.

use std::{
    io::{self, Write},
    path::Path,
};

use super::declaration::{Declaration, DeclarationKind, SourceIndex};
use crate::utils::{adornment, capitalize};

pub const DEFAULT_OUTPUT_NAME: &str = "API.rst";
pub const DEFAULT_MAIN_HEADER: &str = "API Reference";
pub const DEFAULT_SUB_HEADER: &str = "Library";
pub const DEFAULT_NAMESPACE: &str = "phidl.geometry";

/// How the output document is named and titled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// File name of the document inside the output directory.
    pub output_name: String,
    pub main_header: String,
    /// Appended to each per-file title after a space. `None` disables it.
    pub sub_header: Option<String>,
    /// Module path prefixed to every cross-reference target.
    pub namespace: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            main_header: DEFAULT_MAIN_HEADER.to_string(),
            sub_header: Some(DEFAULT_SUB_HEADER.to_string()),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Title of the per-file section: `geometry.py` with suffix `Library`
/// becomes `Geometry Library`.
pub fn subsection_title(source_name: &str, sub_header: Option<&str>) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let mut title = capitalize(&stem);
    if let Some(suffix) = sub_header {
        title.push(' ');
        title.push_str(suffix);
    }
    title
}

pub fn write_main_header<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let bar = adornment('#', title);
    write!(writer, "{bar}\n{title}\n{bar}\n\n\n")
}

pub fn write_subsection_header<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let bar = adornment('*', title);
    write!(writer, "{bar}\n{title}\n{bar}\n\n")
}

pub fn write_entry<W: Write>(
    writer: &mut W,
    declaration: &Declaration,
    namespace: &str,
) -> io::Result<()> {
    let name = &declaration.name;
    write!(writer, "{name}\n{}\n\n", adornment('=', name))?;
    match declaration.kind {
        DeclarationKind::Class => write!(
            writer,
            ".. autoclass:: {namespace}.{name}\n   \
             :members:\n   \
             :inherited-members:\n   \
             :show-inheritance:\n\n\n"
        ),
        DeclarationKind::Function => {
            write!(writer, ".. autofunction:: {namespace}.{name}\n\n\n")
        }
    }
}

/// Write the section for one source file, preceded by the top-level header
/// when `with_main_header` is set.
pub fn write_section<W: Write>(
    writer: &mut W,
    source_name: &str,
    index: &SourceIndex,
    options: &EmitOptions,
    with_main_header: bool,
) -> io::Result<()> {
    if with_main_header {
        write_main_header(writer, &options.main_header)?;
    }
    let title = subsection_title(source_name, options.sub_header.as_deref());
    write_subsection_header(writer, &title)?;
    for declaration in &index.declarations {
        write_entry(writer, declaration, &options.namespace)?;
    }
    Ok(())
}

/// Render a section to a string.
pub fn render_section(
    source_name: &str,
    index: &SourceIndex,
    options: &EmitOptions,
    with_main_header: bool,
) -> io::Result<String> {
    let mut buf = Vec::new();
    write_section(&mut buf, source_name, index, options, with_main_header)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
