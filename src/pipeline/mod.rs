//! End-to-end processing pipeline.
//!
//! Wires the stages together: crawl record → corpus → chunks → scored
//! chunks → bounded merged chunks, then persists the result for the
//! summarization collaborator. Every invocation is stateless; the chunk
//! segmentation and TF-IDF space are recomputed from scratch each time.

use crate::chunking::{Chunker, MultiLevelChunker, SlidingWindowChunker};
use crate::context::ContextBuilder;
use crate::core::{CrawlRecord, MergedChunk};
use crate::error::{Error, Result};
use crate::io::{read_file, write_file};
use crate::ranking::{ChunkPacker, RelevanceScorer, rank_descending};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Default number of merged chunks to emit.
pub const DEFAULT_TOP_K: usize = 20;

/// Sliding-window bounds for the corpus-length heuristic, in words.
const MIN_WINDOW: usize = 512;
const MAX_WINDOW: usize = 2048;
const MIN_STEP: usize = 128;

/// Segments below this word count pass through intermediate stages.
const MIN_SEGMENT_WORDS: usize = 512;

/// Query-driven distillation pipeline over one crawl record.
///
/// # Examples
///
/// ```
/// use pagesieve::context::ContextBuilder;
/// use pagesieve::core::CrawlRecord;
/// use pagesieve::pipeline::Pipeline;
///
/// let pipeline = Pipeline::new("example query", ContextBuilder::without_fetch());
/// let merged = pipeline.process(&CrawlRecord::default(), 20).unwrap();
/// // An empty record yields an (almost) empty corpus and no chunks.
/// assert!(merged.is_empty());
/// ```
pub struct Pipeline {
    query: String,
    builder: ContextBuilder,
}

impl Pipeline {
    /// Creates a pipeline for the given query.
    #[must_use]
    pub fn new(query: impl Into<String>, builder: ContextBuilder) -> Self {
        Self {
            query: query.into(),
            builder,
        }
    }

    /// Returns the pipeline's query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Loads a crawl record from a JSON file.
    ///
    /// A missing or unparsable file degrades to an empty record — the
    /// pipeline then produces empty output rather than aborting. Callers
    /// needing strict guarantees inspect the returned record counts.
    #[must_use]
    pub fn load_record<P: AsRef<Path>>(path: P) -> CrawlRecord {
        let path = path.as_ref();
        let loaded = read_file(path)
            .and_then(|content| serde_json::from_str(&content).map_err(Error::from));

        match loaded {
            Ok(record) => {
                info!(path = %path.display(), "loaded crawl record");
                record
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load crawl record, continuing with empty corpus"
                );
                CrawlRecord::default()
            }
        }
    }

    /// Runs the full pipeline over one record.
    ///
    /// Deterministic: re-running on an unchanged record and query yields
    /// identical output.
    pub fn process(&self, record: &CrawlRecord, top_k: usize) -> Result<Vec<MergedChunk>> {
        let corpus = self.builder.build(record)?;
        let chunks = chunk_corpus(&corpus)?;
        info!(chunks = chunks.len(), "chunked corpus");

        let scorer = RelevanceScorer::new(self.query.as_str());
        let mut scored = scorer.score(&chunks);
        rank_descending(&mut scored);
        if let Some(top) = scored.first() {
            debug!(score = top.score, "top relevance score");
        }

        let merged = ChunkPacker::new(top_k).pack(&scored);
        info!(merged = merged.len(), top_k, "packed merged chunks");
        Ok(merged)
    }

    /// Persists merged chunks as JSON.
    ///
    /// A write failure is logged and absorbed: the caller already holds
    /// the in-memory result, and partial output is preferable to an
    /// aborted run.
    pub fn persist<P: AsRef<Path>>(path: P, merged: &[MergedChunk]) {
        let path = path.as_ref();
        let json = match serde_json::to_string_pretty(merged) {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "failed to serialize merged chunks");
                return;
            }
        };

        match write_file(path, &json) {
            Ok(()) => info!(path = %path.display(), count = merged.len(), "persisted merged chunks"),
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to persist merged chunks");
            }
        }
    }
}

/// Chunks the corpus with a sliding window sized to the corpus length.
pub fn chunk_corpus(corpus: &str) -> Result<Vec<String>> {
    let (window_size, step) = window_heuristic(corpus.len());
    debug!(window_size, step, "sliding window parameters");

    let chunker =
        MultiLevelChunker::new(vec![Box::new(SlidingWindowChunker::new(window_size, step))])
            .with_min_chunk_size(MIN_SEGMENT_WORDS);
    chunker.chunk(corpus)
}

/// Window and stride for a corpus of `text_len` bytes.
///
/// Scales with corpus length: a tenth of the corpus (doubled, clamped to
/// `512..=2048`) per window, half that per step, floored at 128.
const fn window_heuristic(text_len: usize) -> (usize, usize) {
    let window = clamp(text_len / 10 * 2, MIN_WINDOW, MAX_WINDOW);
    let step = clamp(text_len / 20 * 2, MIN_STEP, window / 2);
    (window, step)
}

const fn clamp(value: usize, min: usize, max: usize) -> usize {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
