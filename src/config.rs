use crate::error::{Result, TallyError};
use crate::git::Engine;
use crate::tally::SortKey;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(TallyError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Settings forwarded from the command line into analysis and rendering.
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub format: OutputFormat,
    pub top_n: usize,
    pub sort_by: SortKey,
    pub normalize_names: bool,
    pub show_aliases: bool,
    pub engine: Engine,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: OutputFormat::Table,
            top_n: 0,
            sort_by: SortKey::Commits,
            normalize_names: false,
            show_aliases: false,
            engine: Engine::Git,
        }
    }
}

impl Config {
    /// Aliases only exist when names are normalized.
    pub fn aliases_visible(&self) -> bool {
        self.show_aliases && self.normalize_names
    }
}
