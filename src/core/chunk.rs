//! Scored and merged chunk values.
//!
//! Chunks flow through the pipeline as plain strings until the ranking
//! stage attaches a relevance score. The packer then folds scored chunks
//! into [`MergedChunk`] output units; the originals are never mutated.

use serde::{Deserialize, Serialize};

/// A chunk paired with its relevance score.
///
/// Produced once per scorer call and not mutated afterward. Scores are
/// always in `[0, 1]`; a chunk sharing no vocabulary with the query scores
/// exactly 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// Chunk text.
    pub text: String,

    /// Cosine similarity against the query, in `[0, 1]`.
    pub score: f64,
}

impl ScoredChunk {
    /// Creates a new scored chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// A packer output unit formed by concatenating one or more ranked chunks.
///
/// The score is the maximum score among all chunks folded into the unit.
/// Serialized as `{"chunk": ..., "score": ...}` for the summarization
/// collaborator.
///
/// Every emitted unit except possibly the final one is at most 1000 bytes;
/// the final trailing flush is not re-checked against that bound.
///
/// # Examples
///
/// ```
/// use pagesieve::core::MergedChunk;
///
/// let merged = MergedChunk::new("some packed text", 0.9);
/// let json = serde_json::to_string(&merged).unwrap();
/// assert!(json.contains(r#""chunk":"some packed text""#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedChunk {
    /// Merged chunk text.
    #[serde(rename = "chunk")]
    pub text: String,

    /// Maximum relevance score among the folded chunks.
    pub score: f64,
}

impl MergedChunk {
    /// Creates a new merged chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Returns the unit size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Checks if the unit is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
