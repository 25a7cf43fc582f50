//! Regex-split chunking strategy.
//!
//! Splits text on an ordered sequence of regex patterns, each pattern
//! further splitting every segment that survived the previous one.

use crate::chunking::traits::Chunker;
use crate::error::{ChunkingError, Result};
use regex::Regex;

/// Chunker that splits text on a cascade of regex patterns.
///
/// Starting from the whole text, each pattern in order replaces the
/// current segment list with the concatenation of splitting every segment
/// on that pattern. An empty pattern list is a no-op: the input comes
/// back as a single segment.
///
/// Patterns are compiled at construction; an invalid pattern surfaces
/// immediately rather than on the first `chunk` call.
///
/// # Examples
///
/// ```
/// use pagesieve::chunking::{Chunker, RegexChunker};
///
/// // Paragraphs, then sentences.
/// let chunker = RegexChunker::new(&[r"\n\n", r"(?:[.!?])\s"]).unwrap();
/// let chunks = chunker.chunk("One. Two.\n\nThree.").unwrap();
/// assert_eq!(chunks.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RegexChunker {
    /// Compiled split patterns, applied in order.
    patterns: Vec<Regex>,
}

impl Default for RegexChunker {
    /// Paragraph splitting on blank lines.
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        let pattern = Regex::new(DEFAULT_PATTERN).expect("default pattern compiles");
        Self {
            patterns: vec![pattern],
        }
    }
}

/// Default split pattern: paragraph boundaries.
pub const DEFAULT_PATTERN: &str = r"\n\n";

impl RegexChunker {
    /// Creates a regex chunker from an ordered list of patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::Regex`] if any pattern fails to compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()).map_err(ChunkingError::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns the number of configured patterns.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Chunker for RegexChunker {
    fn chunk(&self, text: &str) -> Result<Vec<String>> {
        let mut segments = vec![text.to_string()];

        for pattern in &self.patterns {
            segments = segments
                .iter()
                .flat_map(|segment| pattern.split(segment).map(str::to_string))
                .collect();
        }

        Ok(segments)
    }

    fn name(&self) -> &'static str {
        "regex"
    }

    fn description(&self) -> &'static str {
        "Sequential regex-split cascade over pattern list"
    }
}
