use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::{GenerateArgs, GenerateCommand};
use super::{CommandKind, CommandResult, CommandSummary, PreviewSummary};
use crate::{
    config::{Config, load_config},
    core::{
        EmitOptions, GenerateRequest, document::resolve_output_path, generate as run_generate,
        preview,
    },
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let GenerateCommand { sources, args } = cmd;

    let root = std::path::absolute(&args.root)
        .with_context(|| format!("Invalid root path: {:?}", args.root))?;
    let loaded = load_config(&root)?;

    if args.verbose {
        match &loaded.path {
            Some(path) => eprintln!("Using config {}", path.display()),
            None => eprintln!("Note: No .genapirc.json found, using default configuration"),
        }
    }

    let request = build_request(&root, loaded.config, sources, &args);

    if args.verbose {
        eprintln!("Source root: {}", request.source_dir.display());
        eprintln!("Output root: {}", request.output_dir.display());
    }

    if args.dry_run {
        let rendered = preview(&request)?;
        let output_path = resolve_output_path(&request.output_dir, &request.options.output_name)?;
        return Ok(CommandResult {
            kind: CommandKind::Generate,
            summary: CommandSummary::Preview(PreviewSummary {
                output_path,
                rendered,
            }),
            error_count: 0,
        });
    }

    let summary = run_generate(&request)?;

    if args.verbose {
        for section in &summary.sections {
            eprintln!(
                "{} {}: {} class(es), {} function(s)",
                "indexed".cyan(),
                section.source_path.display(),
                section.index.class_count(),
                section.index.function_count()
            );
            for name in &section.index.private_functions {
                eprintln!("  {} private function {}", "skipped".dimmed(), name);
            }
        }
    }

    Ok(CommandResult {
        kind: CommandKind::Generate,
        summary: CommandSummary::Generate(summary),
        error_count: 0,
    })
}

/// Merge config values with command-line overrides. Relative directories
/// are resolved against `root`.
fn build_request(
    root: &Path,
    config: Config,
    sources: Vec<String>,
    args: &GenerateArgs,
) -> GenerateRequest {
    let source_dir = resolve_dir(
        root,
        args.source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source_root)),
    );
    let output_dir = resolve_dir(
        root,
        args.output_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_root)),
    );

    let sub_header = if args.no_sub_header {
        None
    } else {
        args.sub_header.clone().or(config.sub_header)
    };

    GenerateRequest {
        source_dir,
        output_dir,
        sources: if sources.is_empty() {
            config.sources
        } else {
            sources
        },
        options: EmitOptions {
            output_name: args.output.clone().unwrap_or(config.output),
            main_header: args.main_header.clone().unwrap_or(config.main_header),
            sub_header,
            namespace: args.namespace.clone().unwrap_or(config.namespace),
        },
        fresh: config.fresh && !args.append,
    }
}

/// `root` is already absolute, so joining keeps the result absolute. An
/// absolute `dir` replaces `root` entirely.
fn resolve_dir(root: &Path, dir: PathBuf) -> PathBuf {
    let joined = root.join(dir);
    // Strip `.` components so printed paths stay readable.
    joined.components().collect()
}
