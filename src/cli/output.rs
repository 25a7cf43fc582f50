//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::MergedChunk;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the merged-chunk output of a process run.
#[must_use]
pub fn format_merged_chunks(merged: &[MergedChunk], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_merged_chunks_text(merged),
        OutputFormat::Json => format_json(&merged),
    }
}

fn format_merged_chunks_text(merged: &[MergedChunk]) -> String {
    if merged.is_empty() {
        return "No chunks produced.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Merged chunks: {}", merged.len());
    for (i, chunk) in merged.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:>3}. [{:.4}] {}",
            i + 1,
            chunk.score,
            truncate(&chunk.text, 75)
        );
    }
    output
}

/// Formats a chunk listing from the chunk command.
#[must_use]
pub fn format_chunks(chunks: &[String], strategy: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Chunks ({strategy}): {}", chunks.len());
            for (i, chunk) in chunks.iter().enumerate() {
                let _ = writeln!(output, "{:>3}. {}", i + 1, truncate(chunk, 75));
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ChunkListing<'a> {
                strategy: &'a str,
                count: usize,
                chunks: &'a [String],
            }
            format_json(&ChunkListing {
                strategy,
                count: chunks.len(),
                chunks,
            })
        }
    }
}

/// Formats an assembled corpus.
#[must_use]
pub fn format_corpus(corpus: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = corpus.to_string();
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Corpus<'a> {
                bytes: usize,
                context: &'a str,
            }
            format_json(&Corpus {
                bytes: corpus.len(),
                context: corpus,
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Serializes any value as pretty JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "serialization failed: {e}"}}"#))
}

/// Truncates a string for single-line display.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_chars).collect();
    format!("{truncated}...")
}
