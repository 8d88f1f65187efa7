use super::normalize::KeyPolicy;
use crate::model::{CommitRow, ContributorStats, History, LineRow, Repository};
use std::collections::BTreeMap;

/// Builds one repository's contributor map from raw history rows.
#[derive(Debug, Clone)]
pub struct Aggregator {
    policy: KeyPolicy,
}

impl Aggregator {
    pub fn new(policy: KeyPolicy) -> Self {
        Self { policy }
    }

    pub fn with_normalization(normalize: bool) -> Self {
        Self::new(KeyPolicy::from_flag(normalize))
    }

    /// Aggregate commit rows first, then line rows, so the display name of
    /// each identity is the first name reported by the commit listing.
    pub fn aggregate(&self, path: &str, commits: &[CommitRow], lines: &[LineRow]) -> Repository {
        let mut repo = Repository::new(path);

        for row in commits {
            self.entry(&mut repo.contributors, &row.author)
                .add_commits(row.commits);
        }

        for row in lines {
            self.entry(&mut repo.contributors, &row.author)
                .add_lines(row.added, row.deleted);
        }

        repo
    }

    pub fn aggregate_history(&self, path: &str, history: &History) -> Repository {
        self.aggregate(path, &history.commits, &history.lines)
    }

    fn entry<'a>(
        &self,
        contributors: &'a mut BTreeMap<String, ContributorStats>,
        raw: &str,
    ) -> &'a mut ContributorStats {
        let key = self.policy.key(raw);
        let stats = contributors
            .entry(key.clone())
            .or_insert_with(|| ContributorStats::new(key, raw.to_string()));
        stats.observe_name(raw);
        stats
    }
}
