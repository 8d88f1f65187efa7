//! Rendering of the merged contributor table.

mod csv;
mod json;
mod table;

pub use csv::write_csv;
pub use json::write_json;
pub use table::write_table;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::model::{ContributorStats, GlobalStats};
use std::io::Write;

/// Rank the contributors per `config` and write them in the configured format.
pub fn render(stats: &GlobalStats, config: &Config, out: &mut dyn Write) -> Result<()> {
    let contributors = stats.ranked(config.sort_by, config.top_n);

    match config.format {
        OutputFormat::Table => write_table(&contributors, &stats.repositories, config, out),
        OutputFormat::Json => write_json(&contributors, &stats.repositories, out),
        OutputFormat::Csv => write_csv(&contributors, config, out),
    }
}

pub(crate) fn display_name(contributor: &ContributorStats, config: &Config) -> String {
    if config.aliases_visible() && !contributor.aliases.is_empty() {
        format!(
            "{} (aliases: {})",
            contributor.name,
            contributor.aliases.join(", ")
        )
    } else {
        contributor.name.clone()
    }
}
