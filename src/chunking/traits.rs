//! Chunker trait definition.
//!
//! Defines the interface for all chunking strategies, enabling
//! pluggable text segmentation approaches.

use crate::error::Result;

/// Trait for chunking text into ordered segments.
///
/// Implementations must be `Send + Sync` so strategies can be shared
/// freely. Each chunker must produce deterministic output for the same
/// input: the pipeline's idempotence guarantee depends on it.
///
/// Strategies compose rather than inherit: the multi-level chunker is
/// itself a `Chunker` wrapping an ordered cascade of other chunkers.
///
/// # Examples
///
/// ```
/// use pagesieve::chunking::{Chunker, RegexChunker};
///
/// let chunker = RegexChunker::new(&["\n\n"]).unwrap();
/// let chunks = chunker.chunk("Para one.\n\nPara two.").unwrap();
/// assert_eq!(chunks, vec!["Para one.", "Para two."]);
/// ```
pub trait Chunker: Send + Sync {
    /// Chunks the input text into an ordered sequence of segments.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text to chunk.
    ///
    /// # Errors
    ///
    /// Returns an error if the chunker's configuration is invalid
    /// (e.g., a zero window or step).
    fn chunk(&self, text: &str) -> Result<Vec<String>>;

    /// Returns the name of the chunking strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the chunking strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }
}
