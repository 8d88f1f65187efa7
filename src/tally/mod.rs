//! Identity resolution and aggregation: raw author rows in, ranked
//! contributor records out.

pub mod aggregate;
mod merge;
pub mod normalize;
pub mod rank;

pub use aggregate::Aggregator;
pub use normalize::{KeyPolicy, NameNormalizer};
pub use rank::{combined_score, SortKey};
