use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),
    #[error("git command failed in {}: {message}", path.display())]
    GitCommand { path: PathBuf, message: String },
    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),
    #[error("failed to serialize report: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("reference listing failed: {0}")]
    GitRefs(String),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read commit tree: {0}")]
    CommitTree(#[from] Box<gix::object::commit::Error>),
    #[error("failed to load commit: {0}")]
    CommitLookup(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("failed to decode commit author: {0}")]
    AuthorDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("failed to diff commit trees: {0}")]
    TreeDiff(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
}

// gix errors are large; keep them boxed so `Result<T>` stays small.
impl From<gix::open::Error> for TallyError {
    fn from(err: gix::open::Error) -> Self {
        TallyError::Open(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for TallyError {
    fn from(err: gix::object::commit::Error) -> Self {
        TallyError::CommitTree(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for TallyError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        TallyError::CommitLookup(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for TallyError {
    fn from(err: gix::objs::decode::Error) -> Self {
        TallyError::AuthorDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for TallyError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        TallyError::TreeDiff(Box::new(err))
    }
}
