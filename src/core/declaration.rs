//! Line-prefix declaration scanner.
//!
//! This is a best-effort lexical classifier, not a Python parser:
//! - a line starting with `class` is a class declaration, named by the text
//!   after `class ` up to the first `:` (base lists are kept verbatim)
//! - a line starting with `def` is a function declaration, named by the text
//!   after `def ` up to the first `(`
//! - every other line is ignored
//!
//! Decorators, multi-line signatures, nested scopes and `async def` are not
//! recognized. Prefix matching is literal, so `classify = 1` matches too.

/// Appended to one-letter function names to build their sort key.
pub const SINGLE_LETTER_MARKER: &str = "GENAPIFUNC";

/// Declaration kinds. Ordering puts classes before functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationKind {
    Class,
    Function,
}

/// A class or function found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Name as it is written to the document.
    pub name: String,
    sort_name: String,
}

impl Declaration {
    pub fn class(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: DeclarationKind::Class,
            sort_name: name.clone(),
            name,
        }
    }

    /// One-letter function names are a known quirk: they sort as the
    /// lower-cased letter followed by [`SINGLE_LETTER_MARKER`] and are
    /// emitted upper-cased. `a` sorts before `ab` and is written as `A`.
    pub fn function(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self {
                kind: DeclarationKind::Function,
                sort_name: format!("{}{}", name.to_lowercase(), SINGLE_LETTER_MARKER),
                name: letter.to_uppercase().collect(),
            },
            _ => Self {
                kind: DeclarationKind::Function,
                sort_name: name.clone(),
                name,
            },
        }
    }

    /// Key used for ordering within a kind.
    pub fn sort_name(&self) -> &str {
        &self.sort_name
    }

    pub fn is_private(&self) -> bool {
        self.kind == DeclarationKind::Function && self.sort_name.starts_with('_')
    }
}

/// Result of scanning one source text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceIndex {
    /// Public declarations, already ordered.
    pub declarations: Vec<Declaration>,
    /// Functions dropped because their name starts with `_`.
    pub private_functions: Vec<String>,
}

impl SourceIndex {
    pub fn class_count(&self) -> usize {
        self.count(DeclarationKind::Class)
    }

    pub fn function_count(&self) -> usize {
        self.count(DeclarationKind::Function)
    }

    fn count(&self, kind: DeclarationKind) -> usize {
        self.declarations.iter().filter(|d| d.kind == kind).count()
    }
}

/// Classify a single line.
///
/// Returns `None` for lines that are not declarations, and for declarations
/// whose captured name is empty (`class:` or `def (x)`).
pub fn classify_line(line: &str) -> Option<Declaration> {
    if let Some(name) = capture_name(line, "class", ':') {
        return (!name.is_empty()).then(|| Declaration::class(name));
    }
    if let Some(name) = capture_name(line, "def", '(') {
        return (!name.is_empty()).then(|| Declaration::function(name));
    }
    None
}

/// Text between `keyword` plus one separator character and the first
/// `terminator`. Without a terminator, the rest of the line is taken.
fn capture_name<'a>(line: &'a str, keyword: &str, terminator: char) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    let mut chars = rest.chars();
    match chars.next() {
        None => return Some(""),
        Some(c) if c == terminator => return Some(""),
        Some(_) => {}
    }
    let body = chars.as_str();
    Some(match body.find(terminator) {
        Some(end) => &body[..end],
        None => body,
    })
}

/// Scan `text` line by line and return its public declarations in
/// document order: classes first, then functions, each ascending.
pub fn index_source(text: &str) -> SourceIndex {
    let mut index = SourceIndex::default();

    for declaration in text.lines().filter_map(classify_line) {
        if declaration.is_private() {
            index.private_functions.push(declaration.name);
        } else {
            index.declarations.push(declaration);
        }
    }

    sort_declarations(&mut index.declarations);
    index
}

/// Stable sort by kind, then by sort name.
pub fn sort_declarations(declarations: &mut [Declaration]) {
    declarations.sort_by(|a, b| (a.kind, a.sort_name()).cmp(&(b.kind, b.sort_name())));
}
