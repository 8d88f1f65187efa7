use super::HistorySource;
use crate::error::{Result, TallyError};
use crate::model::{CommitRow, History, LineRow};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// History read by shelling out to `git shortlog` and `git log --numstat`.
pub struct GitCommand {
    program: String,
}

impl GitCommand {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, repo: &Path, args: &[&str]) -> Result<String> {
        debug!(repo = %repo.display(), ?args, "running git");
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(repo)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| TallyError::GitCommand {
                path: repo.to_path_buf(),
                message: format!("failed to run {}: {e}", self.program),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TallyError::GitCommand {
                path: repo.to_path_buf(),
                message: format!("git {} exited with {}: {}", args.join(" "), output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for GitCommand {
    fn history(&self, repo: &Path) -> Result<History> {
        let shortlog = self.run(repo, &["shortlog", "-sn", "--all"])?;
        let numstat = self.run(repo, &["log", "--all", "--format=%aN", "--numstat"])?;
        Ok(History {
            commits: parse_shortlog(&shortlog),
            lines: parse_numstat(&numstat),
        })
    }
}

/// Parse `git shortlog -sn` output: `<count><whitespace><name>` per line.
/// Lines without a numeric count or a name are dropped.
pub fn parse_shortlog(text: &str) -> Vec<CommitRow> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_start();
            let (count, name) = line.split_once(char::is_whitespace)?;
            let commits = count.parse::<u64>().ok()?;
            let author = name.trim();
            if author.is_empty() {
                return None;
            }
            Some(CommitRow {
                author: author.to_string(),
                commits,
            })
        })
        .collect()
}

/// Parse `git log --format=%aN --numstat` output.
///
/// A line without a tab names the author of the following numstat rows.
/// Numstat rows need at least three tab-separated fields with numeric
/// added/deleted counts; binary entries (`-`) and short rows are dropped.
pub fn parse_numstat(text: &str) -> Vec<LineRow> {
    let mut rows = Vec::new();
    let mut author: Option<&str> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.contains('\t') {
            author = Some(line);
            continue;
        }

        let Some(current) = author else { continue };

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            continue;
        }

        let (Ok(added), Ok(deleted)) = (fields[0].parse::<u64>(), fields[1].parse::<u64>()) else {
            continue;
        };

        rows.push(LineRow {
            author: current.to_string(),
            added,
            deleted,
        });
    }

    rows
}
