use crate::config::{Config, OutputFormat};
use crate::git::Engine;
use crate::tally::SortKey;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gtally")]
#[command(about = "Aggregate contributor statistics across every git repository under a directory")]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = ".", help = "Directory to scan for git repositories")]
    pub dir: PathBuf,

    #[arg(long, default_value = "table", help = "Output format: table, json, csv")]
    pub format: String,

    #[arg(long, default_value_t = 0, help = "Show only the top N contributors (0 = all)")]
    pub top: usize,

    #[arg(long, default_value = "commits", help = "Sort by: commits, lines, combined")]
    pub sort: String,

    #[arg(long, help = "Merge name variants that differ only in case, accents, punctuation or spacing")]
    pub normalize: bool,

    #[arg(long, help = "Show merged name variants (requires --normalize)")]
    pub aliases: bool,

    #[arg(long, value_enum, default_value_t = Engine::Git, help = "History reader")]
    pub engine: Engine,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn config(&self) -> Result<Config> {
        let format: OutputFormat = self.format.parse().context("Invalid --format")?;
        let directory = std::path::absolute(&self.dir)
            .with_context(|| format!("Error resolving directory path {}", self.dir.display()))?;

        Ok(Config {
            directory,
            format,
            top_n: self.top,
            sort_by: SortKey::from(self.sort.as_str()),
            normalize_names: self.normalize,
            show_aliases: self.aliases,
            engine: self.engine,
        })
    }

    pub fn execute(self) -> Result<()> {
        let config = self.config()?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        crate::run::exec(&config, &mut out)
    }
}
