//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::chunking::create_chunker;
use crate::cli::output::{
    OutputFormat, format_chunks, format_corpus, format_merged_chunks,
};
use crate::cli::parser::{Cli, Commands};
use crate::context::ContextBuilder;
use crate::error::{CommandError, Result};
use crate::io::read_file;
use crate::pipeline::Pipeline;
use std::path::Path;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Process {
            input,
            query,
            top_k,
            output,
            skip_urls,
        } => cmd_process(input, query, *top_k, output, *skip_urls, format),
        Commands::Context { input, skip_urls } => cmd_context(input, *skip_urls, format),
        Commands::Chunk { file, strategy } => cmd_chunk(file, strategy, format),
    }
}

fn build_context_builder(skip_urls: bool) -> Result<ContextBuilder> {
    if skip_urls {
        Ok(ContextBuilder::without_fetch())
    } else {
        ContextBuilder::new()
    }
}

fn cmd_process(
    input: &Path,
    query: &str,
    top_k: usize,
    output: &Path,
    skip_urls: bool,
    format: OutputFormat,
) -> Result<String> {
    if top_k == 0 {
        return Err(
            CommandError::InvalidArgument("--top-k must be greater than 0".to_string()).into(),
        );
    }

    let builder = build_context_builder(skip_urls)?;
    let pipeline = Pipeline::new(query, builder);

    let record = Pipeline::load_record(input);
    let merged = pipeline.process(&record, top_k)?;
    Pipeline::persist(output, &merged);

    Ok(format_merged_chunks(&merged, format))
}

fn cmd_context(input: &Path, skip_urls: bool, format: OutputFormat) -> Result<String> {
    let builder = build_context_builder(skip_urls)?;
    let record = Pipeline::load_record(input);
    let corpus = builder.build(&record)?;
    Ok(format_corpus(&corpus, format))
}

fn cmd_chunk(file: &Path, strategy: &str, format: OutputFormat) -> Result<String> {
    let chunker = create_chunker(strategy)?;
    let text = read_file(file)?;
    let chunks = chunker.chunk(&text)?;
    Ok(format_chunks(&chunks, chunker.name(), format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn write_record(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("crawl.json");
        // Large enough that the sliding window (capped at 2048 words)
        // emits chunks: ~6000 words of corpus.
        let markdown = vec!["chunking strategies"; 3000].join(" ");
        let record = format!(
            r#"{{"URLS": [], "tables": [["row one", "row two"]], "markdown": ["{markdown}"]}}"#
        );
        std::fs::write(&path, record).unwrap();
        path
    }

    #[test]
    fn test_execute_process() {
        let dir = TempDir::new().unwrap();
        let input = write_record(&dir);
        let output = dir.path().join("out.json");

        let cli = Cli::parse_from([
            "pagesieve",
            "process",
            input.to_str().unwrap(),
            "--query",
            "chunking",
            "--output",
            output.to_str().unwrap(),
            "--skip-urls",
        ]);
        let rendered = execute(&cli).unwrap();
        assert!(rendered.contains("Merged chunks"));
        assert!(output.exists());
    }

    #[test]
    fn test_execute_context_skip_urls() {
        let dir = TempDir::new().unwrap();
        let input = write_record(&dir);

        let cli = Cli::parse_from([
            "pagesieve",
            "context",
            input.to_str().unwrap(),
            "--skip-urls",
        ]);
        let rendered = execute(&cli).unwrap();
        assert!(rendered.contains("row one"));
        assert!(rendered.contains("chunking strategies"));
    }

    #[test]
    fn test_execute_chunk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Para one.\n\nPara two.").unwrap();

        let cli = Cli::parse_from([
            "pagesieve",
            "chunk",
            path.to_str().unwrap(),
            "--strategy",
            "regex",
        ]);
        let rendered = execute(&cli).unwrap();
        assert!(rendered.contains("Chunks (regex): 2"));
    }

    #[test]
    fn test_execute_chunk_unknown_strategy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "text").unwrap();

        let cli = Cli::parse_from([
            "pagesieve",
            "chunk",
            path.to_str().unwrap(),
            "--strategy",
            "nope",
        ]);
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_execute_process_zero_top_k_is_invalid() {
        let dir = TempDir::new().unwrap();
        let input = write_record(&dir);

        let cli = Cli::parse_from([
            "pagesieve",
            "process",
            input.to_str().unwrap(),
            "--top-k",
            "0",
            "--skip-urls",
        ]);
        assert!(execute(&cli).is_err());
    }

    #[test]
    fn test_execute_process_missing_input_yields_empty_output() {
        // Input-load failure degrades to an empty record, not an error.
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");

        let cli = Cli::parse_from([
            "pagesieve",
            "process",
            "/definitely/not/here.json",
            "--output",
            output.to_str().unwrap(),
            "--skip-urls",
        ]);
        let rendered = execute(&cli).unwrap();
        assert!(rendered.contains("No chunks"));
    }
}
