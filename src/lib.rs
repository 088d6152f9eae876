//! Genapi - Sphinx API reference generator
//!
//! Genapi scans Python source files for top-level `class` and `def`
//! declarations and appends `autoclass`/`autofunction` cross-reference
//! sections to a reStructuredText document.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Declaration scanning and document emission
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
