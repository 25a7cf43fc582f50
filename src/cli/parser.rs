//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::pipeline::DEFAULT_TOP_K;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagesieve: distill crawled page content into query-relevant chunks.
///
/// Reads a crawl record (URL list, tables, markdown), assembles a flat
/// corpus, chunks and ranks it against a query, and repacks the result
/// into size-bounded merged chunks for downstream summarization.
#[derive(Parser, Debug)]
#[command(name = "pagesieve")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a crawl record into ranked, merged chunks.
    Process {
        /// Path to the crawl record JSON file.
        input: PathBuf,

        /// Query guiding relevance ranking.
        #[arg(short, long, default_value = "")]
        query: String,

        /// Maximum number of merged chunks to emit.
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Output file for the merged chunks.
        #[arg(short, long, default_value = "data/processed_chunks.json")]
        output: PathBuf,

        /// Skip per-URL metadata fetching (offline records).
        #[arg(long)]
        skip_urls: bool,
    },

    /// Assemble and print the flat corpus for a crawl record.
    Context {
        /// Path to the crawl record JSON file.
        input: PathBuf,

        /// Skip per-URL metadata fetching (offline records).
        #[arg(long)]
        skip_urls: bool,
    },

    /// Chunk a text file with a named strategy.
    Chunk {
        /// Path to the text file.
        file: PathBuf,

        /// Chunking strategy (regex, sliding, multi-level).
        #[arg(short, long, default_value = "sliding")]
        strategy: String,
    },
}
