//! Relevance ranking and repacking.
//!
//! The scorer attaches TF-IDF cosine similarities to chunks in corpus
//! order; [`rank_descending`] sorts them for the packer, which folds them
//! into size-bounded output units.

pub mod packer;
pub mod scorer;

pub use packer::{ChunkPacker, MERGE_THRESHOLD, SPLIT_THRESHOLD};
pub use scorer::RelevanceScorer;

use crate::core::ScoredChunk;
use std::cmp::Ordering;

/// Sorts scored chunks descending by score.
///
/// The sort is stable: chunks with equal scores keep their original
/// corpus order, which makes the full pipeline deterministic.
pub fn rank_descending(scored: &mut [ScoredChunk]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
