use crate::model::{GlobalStats, Repository};

impl GlobalStats {
    /// Fold one repository into the global table and keep the repository
    /// itself, in call order.
    ///
    /// Counts are summed per canonical key and alias sets are unioned. An
    /// existing display name is never replaced: the first repository to
    /// report an identity decides how it is shown.
    pub fn add_repository(&mut self, repo: Repository) {
        for (key, stats) in &repo.contributors {
            match self.contributors.get_mut(key) {
                Some(existing) => existing.absorb(stats),
                None => {
                    self.contributors.insert(key.clone(), stats.clone());
                }
            }
        }
        self.repositories.push(repo);
    }

    pub fn from_repositories(repos: impl IntoIterator<Item = Repository>) -> Self {
        let mut stats = Self::new();
        for repo in repos {
            stats.add_repository(repo);
        }
        stats
    }
}
