//! Repository discovery under a scan root.

use crate::error::{Result, TallyError};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory names that are never descended into.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".vscode",
    ".idea",
    "target",
    "build",
    "dist",
    ".next",
    ".nuxt",
    "vendor",
    "__pycache__",
    ".cache",
    ".DS_Store",
];

pub fn is_repo_root(path: &Path) -> bool {
    path.join(".git").exists()
}

pub fn should_skip_dir(name: &str) -> bool {
    name == ".git" || SKIP_DIRS.contains(&name)
}

/// Find every repository root below `root`, in lexical walk order.
///
/// The walk stops at a repository boundary, so nested repositories and
/// submodules are not reported. Failing to resolve or read `root` itself is
/// an error; unreadable subdirectories are skipped with a warning.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let root = root.canonicalize()?;
    if !root.is_dir() {
        return Err(TallyError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        )));
    }

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(keep_entry)
        .build();

    let mut repos = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) if err.depth() == Some(0) => return Err(err.into()),
            Err(err) => {
                warn!("cannot access entry: {err}");
                continue;
            }
        };

        if is_dir(&entry) && is_repo_root(entry.path()) {
            repos.push(entry.into_path());
        }
    }

    Ok(repos)
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if !is_dir(entry) {
        return false;
    }
    if entry.file_name().to_str().is_some_and(should_skip_dir) {
        return false;
    }
    !entry.path().parent().is_some_and(is_repo_root)
}
