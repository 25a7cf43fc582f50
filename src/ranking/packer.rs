//! Greedy size-bounded chunk repacking.
//!
//! Compresses a descending-by-score chunk sequence into a bounded number
//! of near-uniform merged units, keeping the highest-scoring material
//! first.

use crate::core::{MergedChunk, ScoredChunk};

/// Buffers below this byte length keep absorbing the next chunk.
pub const MERGE_THRESHOLD: usize = 500;

/// Buffers above this byte length are re-split at a space boundary.
pub const SPLIT_THRESHOLD: usize = 1000;

/// Greedy merge/split packer over ranked chunks.
///
/// Walks the descending-sorted input once, accumulating chunks into a
/// buffer while it stays under [`MERGE_THRESHOLD`] bytes and re-splitting
/// it at the last space before [`SPLIT_THRESHOLD`] whenever it overflows.
/// A merged unit's score is the maximum score folded into it.
///
/// The `top_k` bound is checked around chunk consumption, not strictly
/// around emission: the trailing flush after the input is exhausted is not
/// re-checked against the split threshold, so the final unit may exceed
/// [`SPLIT_THRESHOLD`] bytes, and the emitted count is bounded by
/// `top_k + 1` rather than `top_k`. This is long-standing observable
/// behavior that downstream consumers tolerate; see the tests pinning it.
///
/// # Examples
///
/// ```
/// use pagesieve::core::ScoredChunk;
/// use pagesieve::ranking::ChunkPacker;
///
/// let ranked = vec![
///     ScoredChunk::new("a".repeat(300), 0.9),
///     ScoredChunk::new("b".repeat(300), 0.8),
/// ];
/// let packed = ChunkPacker::new(5).pack(&ranked);
/// assert_eq!(packed.len(), 2);
/// assert!((packed[0].score - 0.9).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChunkPacker {
    /// Maximum number of units to emit (modulo the trailing flush).
    top_k: usize,
    /// Merge threshold in bytes.
    merge_below: usize,
    /// Split threshold in bytes.
    split_above: usize,
}

impl ChunkPacker {
    /// Creates a packer emitting at most `top_k` units (see the caveat on
    /// the trailing flush).
    #[must_use]
    pub const fn new(top_k: usize) -> Self {
        Self {
            top_k,
            merge_below: MERGE_THRESHOLD,
            split_above: SPLIT_THRESHOLD,
        }
    }

    /// Overrides the merge/split byte thresholds.
    #[must_use]
    pub const fn with_bounds(mut self, merge_below: usize, split_above: usize) -> Self {
        self.merge_below = merge_below;
        self.split_above = split_above;
        self
    }

    /// Returns the configured unit budget.
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Packs ranked chunks into bounded merged units.
    ///
    /// `ranked` must already be sorted descending by score; the packer
    /// consumes it in order and never reorders.
    #[must_use]
    pub fn pack(&self, ranked: &[ScoredChunk]) -> Vec<MergedChunk> {
        let mut merged: Vec<MergedChunk> = Vec::new();
        let mut buffer = String::new();
        let mut buffer_score = 0.0f64;
        let mut emitted = 0usize;

        for candidate in ranked {
            if emitted >= self.top_k {
                break;
            }

            if buffer.len() + candidate.text.len() < self.merge_below {
                buffer.push(' ');
                buffer.push_str(&candidate.text);
                buffer_score = buffer_score.max(candidate.score);
            } else {
                if !buffer.is_empty() {
                    merged.push(MergedChunk::new(buffer.trim(), buffer_score));
                    emitted += 1;
                }
                buffer.clear();
                buffer.push_str(&candidate.text);
                buffer_score = candidate.score;
            }

            while buffer.len() > self.split_above && emitted < self.top_k {
                let cut = split_point(&buffer, self.split_above);
                merged.push(MergedChunk::new(buffer[..cut].trim(), buffer_score));
                emitted += 1;
                buffer = buffer[cut..].trim().to_string();
            }
        }

        // Trailing flush: deliberately not re-checked against the split
        // threshold (see type-level docs).
        if !buffer.is_empty() && emitted < self.top_k {
            merged.push(MergedChunk::new(buffer.trim(), buffer_score));
        }

        merged
    }
}

/// Last space at or before `limit`, falling back to a hard cut.
///
/// The hard cut is clamped backward to a UTF-8 character boundary.
fn split_point(buffer: &str, limit: usize) -> usize {
    let cap = find_char_boundary(buffer, limit);
    buffer[..cap].rfind(' ').unwrap_or(cap)
}

/// Finds a valid UTF-8 character boundary at or before the given byte
/// position.
#[must_use]
const fn find_char_boundary(s: &str, pos: usize) -> usize {
    if pos >= s.len() {
        return s.len();
    }
    let bytes = s.as_bytes();
    let mut boundary = pos;
    // UTF-8 continuation bytes start with 10xxxxxx (0x80-0xBF)
    while boundary > 0 && (bytes[boundary] & 0xC0) == 0x80 {
        boundary -= 1;
    }
    boundary
}
