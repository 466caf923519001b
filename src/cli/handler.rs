use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::commands::CliArgs;
use super::output;
use crate::config::ChanvarsConfig;
use crate::fs::RealFileSystem;
use crate::output::{write_document, VariablesDocument};
use crate::scan::VariableScanner;
use crate::version;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub variables: usize,
    pub needs_review: usize,
    pub out: PathBuf,
    pub version: String,
}

/// Merges CLI arguments over the environment-derived defaults
pub fn build_config(args: &CliArgs) -> ChanvarsConfig {
    let defaults = ChanvarsConfig::default();

    ChanvarsConfig {
        base: args.base.clone(),
        dirs: ChanvarsConfig::resolve_dirs(&args.dirs, args.exclude_src),
        out: args.out.clone().unwrap_or(defaults.out),
        pretty: args.pretty || defaults.pretty,
        log_level: args
            .log_level
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or(defaults.log_level),
    }
}

/// Runs a scan and returns the process exit code
pub fn handle_scan(args: &CliArgs) -> i32 {
    match run(args) {
        Ok(summary) => {
            debug!(?summary, "Run finished");
            0
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

pub fn run(args: &CliArgs) -> Result<RunSummary> {
    let config = build_config(args);
    config.validate()?;
    debug!("{}", config);

    let scanner = VariableScanner::new(RealFileSystem::new(), &config.base)?
        .with_dirs(&config.dirs);
    let result = scanner.scan().context("Scan failed")?;

    if args.show_replacements {
        print!("{}", output::format_replacements(&result.replacements()));
    }

    if args.needs_review {
        print!("{}", output::format_needs_review(&result.needs_review));
    }

    if let Some(notice) = output::format_review_notice(result.needs_review.len()) {
        println!("{}", notice);
    }

    let out = absolute(&config.out)?;
    let version = version::describe(&config.base);
    if version.is_empty() {
        info!(base = %config.base.display(), "No git version found for base");
    }

    let needs_review = result.needs_review.len();
    let doc = VariablesDocument::new(result.index, version.clone());
    let variables = doc.len();

    write_document(&doc, &out, config.pretty)
        .with_context(|| format!("Failed to write output to {}", out.display()))?;

    println!("{}", output::format_summary(variables, &out));

    Ok(RunSummary {
        variables,
        needs_review,
        out,
        version,
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(path))
}
