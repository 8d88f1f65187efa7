use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Accumulated statistics for one contributor identity.
///
/// Counts only ever grow and saturate at `u64::MAX`. `lines_changed` is
/// kept equal to `lines_added + lines_deleted` (saturating) by every
/// mutating method, and `aliases` never holds `name` or a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorStats {
    #[serde(skip)]
    pub key: String,
    pub name: String,
    pub commit_count: u64,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub lines_changed: u64,
    pub aliases: Vec<String>,
}

impl ContributorStats {
    pub fn new(key: String, name: String) -> Self {
        Self {
            key,
            name,
            commit_count: 0,
            lines_added: 0,
            lines_deleted: 0,
            lines_changed: 0,
            aliases: Vec::new(),
        }
    }

    /// Record a raw name seen for this identity. The first name stays the
    /// display name; anything else becomes an alias.
    pub fn observe_name(&mut self, raw: &str) {
        if raw != self.name && !self.aliases.iter().any(|a| a == raw) {
            self.aliases.push(raw.to_string());
        }
    }

    pub fn add_commits(&mut self, count: u64) {
        self.commit_count = self.commit_count.saturating_add(count);
    }

    pub fn add_lines(&mut self, added: u64, deleted: u64) {
        self.lines_added = self.lines_added.saturating_add(added);
        self.lines_deleted = self.lines_deleted.saturating_add(deleted);
        self.lines_changed = self.lines_added.saturating_add(self.lines_deleted);
    }

    /// Fold another record for the same identity into this one.
    pub fn absorb(&mut self, other: &ContributorStats) {
        self.add_commits(other.commit_count);
        self.add_lines(other.lines_added, other.lines_deleted);
        if other.name != self.name {
            self.observe_name(&other.name);
        }
        for alias in &other.aliases {
            self.observe_name(alias);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Repository {
    pub path: String,
    pub name: String,
    pub contributors: BTreeMap<String, ContributorStats>,
}

impl Repository {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = repo_name(&path);
        Self {
            path,
            name,
            contributors: BTreeMap::new(),
        }
    }
}

/// Final path segment after the last `/` or `\`. An empty path is
/// `"unknown"`; a trailing separator yields an empty name.
pub fn repo_name(path: &str) -> String {
    if path.is_empty() {
        return "unknown".to_string();
    }
    match path.rfind(['/', '\\']) {
        Some(idx) => path[idx + 1..].to_string(),
        None => path.to_string(),
    }
}

/// Contributor totals merged across every repository added so far.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GlobalStats {
    pub contributors: BTreeMap<String, ContributorStats>,
    pub repositories: Vec<Repository>,
}

impl GlobalStats {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyOutput<'a> {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repositories: &'a [Repository],
    pub contributors: Vec<&'a ContributorStats>,
}

/// Commits attributed to one exact author name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRow {
    pub author: String,
    pub commits: u64,
}

/// Lines added and deleted under one author name. Rows are not
/// pre-aggregated; the same name repeats once per commit or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow {
    pub author: String,
    pub added: u64,
    pub deleted: u64,
}

/// Raw per-author rows read from one repository's history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    pub commits: Vec<CommitRow>,
    pub lines: Vec<LineRow>,
}
