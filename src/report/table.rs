use super::display_name;
use crate::config::Config;
use crate::error::Result;
use crate::model::{ContributorStats, Repository};
use console::style;
use std::io::Write;

const MIN_NAME_WIDTH: usize = 20;
const NAME_PADDING: usize = 2;

pub fn write_table(
    contributors: &[&ContributorStats],
    repos: &[Repository],
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "{}", style("Git Repository Analysis").bold())?;
    writeln!(out, "{}", "=".repeat(23))?;
    writeln!(out)?;

    writeln!(out, "Found {} repositories:", repos.len())?;
    for repo in repos {
        writeln!(out, "  - {} ({})", repo.name, repo.path)?;
    }
    writeln!(out)?;

    if contributors.is_empty() {
        writeln!(out, "No contributors found.")?;
        return Ok(());
    }

    writeln!(out, "{}", style("Top Contributors").bold())?;
    writeln!(out, "{}", "=".repeat(16))?;
    writeln!(out)?;

    let names: Vec<String> = contributors.iter().map(|c| display_name(c, config)).collect();
    let width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH)
        + NAME_PADDING;

    writeln!(
        out,
        "{:<width$} {:>8} {:>10} {:>10} {:>12}",
        "Name", "Commits", "Lines+", "Lines-", "Total Lines"
    )?;
    writeln!(
        out,
        "{:<width$} {:>8} {:>10} {:>10} {:>12}",
        "-".repeat(width),
        "-------",
        "------",
        "------",
        "-----------"
    )?;

    for (name, c) in names.iter().zip(contributors) {
        writeln!(
            out,
            "{:<width$} {:>8} {:>10} {:>10} {:>12}",
            name, c.commit_count, c.lines_added, c.lines_deleted, c.lines_changed
        )?;
    }

    Ok(())
}
