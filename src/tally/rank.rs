use crate::model::{ContributorStats, GlobalStats};
use std::cmp::Ordering;

const COMMITS_WEIGHT: u64 = 10;
const LINES_DIVISOR: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Commits,
    Lines,
    Combined,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Commits => "commits",
            SortKey::Lines => "lines",
            SortKey::Combined => "combined",
        }
    }

    fn score(&self, stats: &ContributorStats) -> u64 {
        match self {
            SortKey::Commits => stats.commit_count,
            SortKey::Lines => stats.lines_changed,
            SortKey::Combined => combined_score(stats),
        }
    }
}

/// Unknown keys rank by commits.
impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "lines" => SortKey::Lines,
            "combined" => SortKey::Combined,
            _ => SortKey::Commits,
        }
    }
}

pub fn combined_score(stats: &ContributorStats) -> u64 {
    stats
        .commit_count
        .saturating_mul(COMMITS_WEIGHT)
        .saturating_add(stats.lines_changed / LINES_DIVISOR)
}

impl GlobalStats {
    /// Contributors in descending order of `sort`, ties broken by canonical
    /// key. `limit == 0` returns everyone.
    pub fn ranked(&self, sort: SortKey, limit: usize) -> Vec<&ContributorStats> {
        let mut contributors: Vec<&ContributorStats> = self.contributors.values().collect();
        contributors.sort_by(|a, b| compare(sort, a, b));
        if limit > 0 {
            contributors.truncate(limit);
        }
        contributors
    }
}

fn compare(sort: SortKey, a: &ContributorStats, b: &ContributorStats) -> Ordering {
    sort.score(b)
        .cmp(&sort.score(a))
        .then_with(|| a.key.cmp(&b.key))
}
