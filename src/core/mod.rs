//! Declaration indexing and document emission.
//!
//! The pipeline for one source file is linear:
//! - `declaration`: scan lines, classify `class`/`def` declarations, order them
//! - `emit`: render the RST headers and cross-reference entries
//! - `document`: resolve paths, append the section to the output file
//!
//! `generate` drives several source files into one document.

pub mod declaration;
pub mod document;
pub mod emit;
pub mod error;
pub mod generate;

pub use declaration::{Declaration, DeclarationKind, SourceIndex, classify_line, index_source};
pub use document::{AppendSummary, RemovalOutcome, append_api_reference, remove_stale_output};
pub use emit::EmitOptions;
pub use error::{GenerateError, GenerateResult};
pub use generate::{GenerateRequest, GenerateSummary, generate, preview};
