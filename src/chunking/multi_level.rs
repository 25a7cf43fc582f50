//! Multi-level composite chunking strategy.
//!
//! Orchestrates an ordered cascade of chunking stages with a size-based
//! pass-through rule for already-small segments.

use crate::chunking::traits::Chunker;
use crate::error::Result;

/// Composite chunker applying an ordered cascade of stages.
///
/// Maintains a current segment list, initialized to the whole text. Each
/// stage re-chunks every current segment and the concatenated results
/// become the next segment list.
///
/// When a minimum chunk size (in whitespace-delimited words) is set,
/// segments already below it pass through intermediate stages unchanged so
/// they are not fragmented further. The last stage never defers: it
/// processes every segment regardless of size.
///
/// # Examples
///
/// ```
/// use pagesieve::chunking::{Chunker, MultiLevelChunker, RegexChunker, SlidingWindowChunker};
///
/// let chunker = MultiLevelChunker::new(vec![
///     Box::new(RegexChunker::new(&[r"\n\n"]).unwrap()),
///     Box::new(SlidingWindowChunker::new(10, 5)),
/// ])
/// .with_min_chunk_size(20);
///
/// let chunks = chunker.chunk("short paragraph\n\nanother short one").unwrap();
/// // Under 20 words, the text skips the paragraph stage; the sliding
/// // stage is last so it still runs, and emits nothing for sub-window
/// // input.
/// assert!(chunks.is_empty());
/// ```
pub struct MultiLevelChunker {
    /// Cascade stages, applied in order.
    stages: Vec<Box<dyn Chunker>>,
    /// Pass-through threshold in words; `None` disables the rule.
    min_chunk_size: Option<usize>,
}

impl MultiLevelChunker {
    /// Creates a multi-level chunker from an ordered stage list.
    #[must_use]
    pub fn new(stages: Vec<Box<dyn Chunker>>) -> Self {
        Self {
            stages,
            min_chunk_size: None,
        }
    }

    /// Sets the pass-through threshold in whitespace-delimited words.
    ///
    /// Segments with fewer words skip every stage except the last.
    #[must_use]
    pub const fn with_min_chunk_size(mut self, words: usize) -> Self {
        self.min_chunk_size = Some(words);
        self
    }

    /// Returns the number of cascade stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

impl Chunker for MultiLevelChunker {
    fn chunk(&self, text: &str) -> Result<Vec<String>> {
        let mut current = vec![text.to_string()];
        if self.stages.is_empty() {
            return Ok(current);
        }

        let last_stage = self.stages.len() - 1;
        for (i, stage) in self.stages.iter().enumerate() {
            let mut next = Vec::new();

            for segment in &current {
                // Pass-through: already-small segments skip every stage
                // except the last one.
                if let Some(min_words) = self.min_chunk_size
                    && i < last_stage
                    && segment.split_whitespace().count() < min_words
                {
                    next.push(segment.clone());
                    continue;
                }
                next.extend(stage.chunk(segment)?);
            }

            current = next;
        }

        Ok(current)
    }

    fn name(&self) -> &'static str {
        "multi-level"
    }

    fn description(&self) -> &'static str {
        "Ordered chunker cascade with small-segment pass-through"
    }
}
