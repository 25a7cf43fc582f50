//! Chunking strategies for pagesieve.
//!
//! This module provides a trait-based system for segmenting text into
//! processable chunks. Three strategies are available:
//!
//! - **Regex**: ordered cascade of split patterns
//! - **Sliding**: overlapping word windows with configurable stride
//! - **Multi-level**: composite cascade with small-segment pass-through

pub mod multi_level;
pub mod regex_split;
pub mod sliding;
pub mod traits;

pub use multi_level::MultiLevelChunker;
pub use regex_split::RegexChunker;
pub use sliding::SlidingWindowChunker;
pub use traits::Chunker;

use crate::error::{ChunkingError, Result};

/// Default sliding-window size in whitespace-delimited words.
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Default sliding-window stride in words.
pub const DEFAULT_STEP: usize = 50;

/// Creates a chunker by name.
///
/// # Arguments
///
/// * `name` - Chunker strategy name: "regex", "sliding", or "multi-level".
///
/// # Returns
///
/// A boxed chunker trait object, or an error for unknown strategies.
/// The multi-level default is a paragraph split followed by a sliding
/// window.
///
/// # Errors
///
/// Returns [`ChunkingError::UnknownStrategy`] if the strategy name is not
/// recognized.
pub fn create_chunker(name: &str) -> Result<Box<dyn Chunker>> {
    match name.to_lowercase().as_str() {
        "regex" => Ok(Box::new(RegexChunker::default())),
        "sliding" => Ok(Box::new(SlidingWindowChunker::default())),
        "multi-level" | "multi" => Ok(Box::new(
            MultiLevelChunker::new(vec![
                Box::new(RegexChunker::default()),
                Box::new(SlidingWindowChunker::default()),
            ])
            .with_min_chunk_size(DEFAULT_STEP),
        )),
        _ => Err(ChunkingError::UnknownStrategy {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available chunking strategy names.
#[must_use]
pub fn available_strategies() -> Vec<&'static str> {
    vec!["regex", "sliding", "multi-level"]
}
