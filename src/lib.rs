//! # pagesieve
//!
//! Distills raw crawled page content into a bounded set of query-relevant
//! text segments for downstream summarization.
//!
//! The pipeline runs in four stages over one crawl record:
//!
//! - **Context**: tables, per-URL page metadata, and cleaned markdown are
//!   flattened into a single corpus string
//! - **Chunking**: a multi-level cascade of strategies (regex split,
//!   sliding word windows) segments the corpus
//! - **Ranking**: a per-call TF-IDF vector space scores every chunk
//!   against the query by cosine similarity
//! - **Packing**: a greedy merge/split pass folds the ranked chunks into
//!   near-uniform output units under size bounds
//!
//! Every invocation is stateless: no vocabulary, index, or segmentation
//! survives between calls.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod context;
pub mod core;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod ranking;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{CrawlRecord, MergedChunk, ScoredChunk};

// Re-export chunking types
pub use chunking::{
    Chunker, MultiLevelChunker, RegexChunker, SlidingWindowChunker, available_strategies,
    create_chunker,
};

// Re-export context types
pub use context::{ContextBuilder, MetadataScraper, PageMetadata};

// Re-export ranking types
pub use ranking::{ChunkPacker, MERGE_THRESHOLD, RelevanceScorer, SPLIT_THRESHOLD, rank_descending};

// Re-export pipeline types
pub use pipeline::{DEFAULT_TOP_K, Pipeline};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
