use crate::config::{Config, OutputFormat};
use crate::git::HistorySource;
use crate::model::{GlobalStats, Repository};
use crate::scan;
use crate::tally::Aggregator;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Scan, analyze, and render. Returns after writing the report, or without
/// output when no repositories were found.
pub fn exec(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let source = config.engine.source();
    run_with_source(config, source.as_ref(), out)
}

pub fn run_with_source(
    config: &Config,
    source: &dyn HistorySource,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if config.show_aliases && !config.normalize_names {
        warn!("--aliases has no effect without --normalize");
    }

    info!(dir = %config.directory.display(), "scanning for repositories");
    let repos = scan::discover(&config.directory).with_context(|| {
        format!("Failed to scan {} for repositories", config.directory.display())
    })?;

    if repos.is_empty() {
        warn!(dir = %config.directory.display(), "no git repositories found");
        return Ok(());
    }
    info!(count = repos.len(), sort = config.sort_by.label(), "found repositories, analyzing");

    let aggregator = Aggregator::with_normalization(config.normalize_names);
    let stats = analyze_all(&repos, source, &aggregator, progress_bar(config, repos.len()));

    crate::report::render(&stats, config, out).context("Failed to render report")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Analyze each repository in order. A repository whose history cannot be
/// read is skipped and never touches the global table.
pub fn analyze_all(
    repos: &[PathBuf],
    source: &dyn HistorySource,
    aggregator: &Aggregator,
    pb: ProgressBar,
) -> GlobalStats {
    let mut stats = GlobalStats::new();

    for (i, path) in repos.iter().enumerate() {
        pb.set_message(format!("{}/{} {}", i + 1, repos.len(), path.display()));
        match analyze_repository(path, source, aggregator) {
            Ok(repo) => stats.add_repository(repo),
            Err(err) => warn!(repo = %path.display(), "failed to analyze repository: {err:#}"),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    stats
}

pub fn analyze_repository(
    path: &Path,
    source: &dyn HistorySource,
    aggregator: &Aggregator,
) -> anyhow::Result<Repository> {
    let history = source
        .history(path)
        .with_context(|| format!("Failed to read history of {}", path.display()))?;
    Ok(aggregator.aggregate_history(&path.to_string_lossy(), &history))
}

// Machine-readable output keeps the terminal quiet.
fn progress_bar(config: &Config, len: usize) -> ProgressBar {
    if config.format != OutputFormat::Table {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
