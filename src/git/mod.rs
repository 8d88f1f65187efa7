//! Sources of raw per-author history rows.

pub mod command;
pub mod repo;

pub use command::{parse_numstat, parse_shortlog, GitCommand};
pub use repo::GitRepo;

use crate::error::Result;
use crate::model::History;
use clap::ValueEnum;
use std::path::Path;

/// Reads the raw commit and line-change rows of one repository.
pub trait HistorySource {
    fn history(&self, repo: &Path) -> Result<History>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Engine {
    /// Run the `git` executable
    #[default]
    Git,
    /// Read objects in-process with gix
    Gix,
}

pub struct GixSource;

impl HistorySource for GixSource {
    fn history(&self, repo: &Path) -> Result<History> {
        GitRepo::open(repo)?.history()
    }
}

impl Engine {
    pub fn source(self) -> Box<dyn HistorySource> {
        match self {
            Engine::Git => Box::new(GitCommand::new()),
            Engine::Gix => Box::new(GixSource),
        }
    }
}
