use crate::error::{Result, TallyError};
use crate::model::{CommitRow, History, LineRow};
use gix::object::tree::diff::ChangeDetached;
use gix::{ObjectId, Repository};
use similar::{ChangeTag, TextDiff};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// In-process history reader for a single repository.
pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`. Parent directories are not
    /// searched, so a scanned directory never resolves to an enclosing repo.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = gix::open(path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        Ok(Self { repo, path })
    }

    /// Walk every commit reachable from HEAD or any reference, counting
    /// commits per author name. Merge commits count toward the author but
    /// carry no line-change row.
    pub fn history(&self) -> Result<History> {
        let tips = self.tips()?;
        if tips.is_empty() {
            debug!(repo = %self.path.display(), "no commits reachable, no history");
            return Ok(History::default());
        }

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut lines = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = tips;

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let author = commit.author()?.name.to_string();
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.detach()).collect();

            let count = counts.entry(author.clone()).or_insert(0);
            *count = count.saturating_add(1);

            if parents.len() <= 1 {
                let (added, deleted) = self.commit_line_stats(commit_id, parents.first().copied())?;
                lines.push(LineRow {
                    author,
                    added,
                    deleted,
                });
            }

            stack.extend(parents);
        }

        // Same shape as `git shortlog -sn`: most commits first.
        let mut commits: Vec<CommitRow> = counts
            .into_iter()
            .map(|(author, commits)| CommitRow { author, commits })
            .collect();
        commits.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.author.cmp(&b.author)));

        Ok(History { commits, lines })
    }

    /// Commit ids named by HEAD and every reference, like `git log --all`.
    /// References that do not resolve to a commit are ignored.
    fn tips(&self) -> Result<Vec<ObjectId>> {
        let mut ids: Vec<ObjectId> = Vec::new();
        if let Ok(head) = self.repo.head_id() {
            ids.push(head.detach());
        }

        let platform = self
            .repo
            .references()
            .map_err(|err| TallyError::GitRefs(err.to_string()))?;
        let refs = platform
            .all()
            .map_err(|err| TallyError::GitRefs(err.to_string()))?;
        for reference in refs {
            let mut reference = match reference {
                Ok(reference) => reference,
                Err(err) => {
                    debug!(repo = %self.path.display(), "skipping unreadable reference: {err}");
                    continue;
                }
            };
            match reference.peel_to_id_in_place() {
                Ok(id) => ids.push(id.detach()),
                Err(err) => debug!(
                    repo = %self.path.display(),
                    name = %reference.name().as_bstr(),
                    "skipping unresolvable reference: {err}"
                ),
            }
        }

        let mut unique = HashSet::new();
        ids.retain(|id| unique.insert(*id) && self.repo.find_commit(*id).is_ok());
        Ok(ids)
    }

    fn commit_line_stats(&self, commit_id: ObjectId, parent_id: Option<ObjectId>) -> Result<(u64, u64)> {
        let commit_tree = self.repo.find_commit(commit_id)?.tree()?;
        let changes: Vec<ChangeDetached> = match parent_id {
            Some(parent_id) => {
                let parent_tree = self.repo.find_commit(parent_id)?.tree()?;
                self.repo
                    .diff_tree_to_tree(Some(&parent_tree), Some(&commit_tree), None)?
            }
            None => self.repo.diff_tree_to_tree(None, Some(&commit_tree), None)?,
        };

        let mut added = 0u64;
        let mut deleted = 0u64;
        for change in changes {
            let (a, d) = self.change_line_stats(change);
            added = added.saturating_add(a);
            deleted = deleted.saturating_add(d);
        }
        Ok((added, deleted))
    }

    /// Binary blobs and objects that cannot be read count as zero lines.
    fn change_line_stats(&self, change: ChangeDetached) -> (u64, u64) {
        match change {
            ChangeDetached::Addition { id, .. } => match self.repo.find_object(id) {
                Ok(obj) if !is_binary(&obj.data) => (count_lines(&obj.data), 0),
                _ => (0, 0),
            },
            ChangeDetached::Deletion { id, .. } => match self.repo.find_object(id) {
                Ok(obj) if !is_binary(&obj.data) => (0, count_lines(&obj.data)),
                _ => (0, 0),
            },
            ChangeDetached::Modification { previous_id, id, .. } => {
                self.blob_pair_stats(previous_id, id)
            }
            ChangeDetached::Rewrite {
                source_id, id, copy, ..
            } => {
                let (added, deleted) = self.blob_pair_stats(source_id, id);
                if copy {
                    (added, 0)
                } else {
                    (added, deleted)
                }
            }
        }
    }

    fn blob_pair_stats(&self, old_id: ObjectId, new_id: ObjectId) -> (u64, u64) {
        match (self.repo.find_object(old_id), self.repo.find_object(new_id)) {
            (Ok(old_obj), Ok(new_obj)) => {
                if is_binary(&old_obj.data) || is_binary(&new_obj.data) {
                    (0, 0)
                } else {
                    line_diff(&old_obj.data, &new_obj.data)
                }
            }
            _ => (0, 0),
        }
    }
}

fn is_binary(data: &[u8]) -> bool {
    data.iter().take(8192).any(|&b| b == 0)
}

fn count_lines(data: &[u8]) -> u64 {
    String::from_utf8_lossy(data).lines().count() as u64
}

/// Exact added/deleted line counts between two text blobs, the same
/// numbers `git log --numstat` reports for a modified file.
pub fn line_diff(old: &[u8], new: &[u8]) -> (u64, u64) {
    let old_text = String::from_utf8_lossy(old);
    let new_text = String::from_utf8_lossy(new);
    let diff = TextDiff::from_lines(old_text.as_ref(), new_text.as_ref());

    let mut added = 0u64;
    let mut deleted = 0u64;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => deleted += 1,
            ChangeTag::Equal => {}
        }
    }
    (added, deleted)
}
