//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow genapi to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, PreviewSummary};
use crate::core::{GenerateSummary, RemovalOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print the outcome of a command to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, out, err),
        CommandSummary::Preview(summary) => print_preview(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_generate<O: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose && summary.removal == Some(RemovalOutcome::Removed) {
        let _ = writeln!(
            err,
            "Removed stale {}",
            summary.output_path.display()
        );
    }

    let classes = summary.class_count();
    let functions = summary.function_count();
    let sources = summary.sections.len();
    let msg = format!(
        "Wrote {} {}, {} {} from {} source {} to {}",
        classes,
        plural(classes, "class", "classes"),
        functions,
        plural(functions, "function", "functions"),
        sources,
        plural(sources, "file", "files"),
        summary.output_path.display()
    );
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());

    let private = summary.private_count();
    if private > 0 && !verbose {
        let _ = writeln!(
            err,
            "{} {} private {} skipped (use {} for details)",
            "note:".bold().cyan(),
            private,
            plural(private, "function", "functions"),
            "-v".cyan()
        );
    }
}

fn print_preview<O: Write, E: Write>(summary: &PreviewSummary, out: &mut O, err: &mut E) {
    let _ = write!(out, "{}", summary.rendered);
    let _ = writeln!(
        err,
        "{} dry run, nothing written to {}",
        "warning:".bold().yellow(),
        summary.output_path.display()
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", summary.path.display()).red()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
