use crate::error::Result;
use crate::model::{ContributorStats, Repository, TallyOutput, SCHEMA_VERSION};
use chrono::Utc;
use std::io::Write;

pub fn write_json(
    contributors: &[&ContributorStats],
    repos: &[Repository],
    out: &mut dyn Write,
) -> Result<()> {
    let output = TallyOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repositories: repos,
        contributors: contributors.to_vec(),
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
