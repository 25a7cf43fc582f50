//! Sliding-window chunking strategy.
//!
//! Emits overlapping windows of whitespace-delimited words.

use crate::chunking::traits::Chunker;
use crate::chunking::{DEFAULT_STEP, DEFAULT_WINDOW_SIZE};
use crate::error::{ChunkingError, Result};

/// Chunker that slides a fixed word window across the text.
///
/// The text is split into whitespace-delimited words; windows of
/// `window_size` words are emitted starting at offsets `0, step, 2*step,
/// ...` while a full window still fits. Consecutive windows overlap by
/// `window_size - step` words. Text shorter than one window produces zero
/// chunks.
///
/// # Examples
///
/// ```
/// use pagesieve::chunking::{Chunker, SlidingWindowChunker};
///
/// let chunker = SlidingWindowChunker::new(3, 2);
/// let chunks = chunker.chunk("a b c d e f").unwrap();
/// assert_eq!(chunks, vec!["a b c", "c d e"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlidingWindowChunker {
    /// Window size in words.
    window_size: usize,
    /// Stride between window starts, in words.
    step: usize,
}

impl Default for SlidingWindowChunker {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            step: DEFAULT_STEP,
        }
    }
}

impl SlidingWindowChunker {
    /// Creates a sliding-window chunker.
    ///
    /// # Arguments
    ///
    /// * `window_size` - Window size in whitespace-delimited words.
    /// * `step` - Stride between window starts, in words.
    #[must_use]
    pub const fn new(window_size: usize, step: usize) -> Self {
        Self { window_size, step }
    }

    /// Returns the window size in words.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the stride in words.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns the overlap between consecutive windows, in words.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.window_size.saturating_sub(self.step)
    }

    fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ChunkingError::InvalidConfig {
                reason: "window_size must be > 0".to_string(),
            }
            .into());
        }
        if self.step == 0 {
            return Err(ChunkingError::InvalidConfig {
                reason: "step must be > 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Chunker for SlidingWindowChunker {
    fn chunk(&self, text: &str) -> Result<Vec<String>> {
        self.validate()?;

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < self.window_size {
            return Ok(vec![]);
        }

        let mut chunks = Vec::new();
        let mut start = 0;
        while start + self.window_size <= words.len() {
            chunks.push(words[start..start + self.window_size].join(" "));
            start += self.step;
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "sliding"
    }

    fn description(&self) -> &'static str {
        "Overlapping word windows with configurable stride"
    }
}
