//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Append API cross-reference sections for source files
//! - `init`: Initialize genapi configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Project root; config lookup and relative paths start here
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory containing the source files (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory the document is written to (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Output document file name (overrides config file)
    #[arg(long)]
    pub output: Option<String>,

    /// Top-level document title (overrides config file)
    #[arg(long)]
    pub main_header: Option<String>,

    /// Suffix appended to each per-file title (overrides config file)
    #[arg(long, conflicts_with = "no_sub_header")]
    pub sub_header: Option<String>,

    /// Do not append a suffix to per-file titles
    #[arg(long)]
    pub no_sub_header: bool,

    /// Module path used as cross-reference target prefix (overrides config file)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Keep an existing output document and append to it
    #[arg(long)]
    pub append: bool,

    /// Print the text that would be appended instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Source files or glob patterns, relative to the source root (default: from config)
    pub sources: Vec<String>,
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Append API reference sections for the given source files
    Generate(GenerateCommand),
    /// Initialize a new .genapirc.json configuration file
    Init,
}
