//! Core domain models for pagesieve.
//!
//! This module contains the fundamental data structures used throughout the
//! pipeline: crawl records, scored chunks, and merged output chunks. These
//! are pure domain models with no I/O dependencies, created fresh per
//! pipeline invocation and discarded after output is persisted.

pub mod chunk;
pub mod record;

pub use chunk::{MergedChunk, ScoredChunk};
pub use record::CrawlRecord;
