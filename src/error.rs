//! Error types for pagesieve operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! pipeline operations including chunking, context assembly, I/O, and CLI
//! commands.
//!
//! No error in the core pipeline is fatal to the process: input-load
//! failures degrade to an empty corpus, per-URL fetch failures are recorded
//! and skipped, and persist failures are logged while the in-memory result
//! is still returned.

use thiserror::Error;

/// Result type alias for pagesieve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for pipeline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking-related errors (text segmentation).
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    /// Context assembly errors (fetching, parsing, serialization).
    #[error("context error: {0}")]
    Context(#[from] ContextError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Chunking-specific errors for text segmentation.
#[derive(Error, Debug)]
pub enum ChunkingError {
    /// Invalid chunker configuration.
    #[error("invalid chunker configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(String),

    /// Unknown chunking strategy.
    #[error("unknown chunking strategy: {name}")]
    UnknownStrategy {
        /// Name of the unknown strategy.
        name: String,
    },
}

/// Context-assembly errors for the corpus builder.
#[derive(Error, Debug)]
pub enum ContextError {
    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// A per-URL fetch or parse failed.
    ///
    /// Isolated per item: the batch continues and the failure is recorded
    /// as a `{url, error}` entry in the corpus.
    #[error("failed to fetch {url}: {reason}")]
    Fetch {
        /// URL that failed.
        url: String,
        /// Reason for the failure.
        reason: String,
    },

    /// Invalid CSS selector (construction-time only).
    #[error("invalid selector: {0}")]
    Selector(String),

    /// Serialization of corpus sections failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

// Implement From traits for standard library and dependency errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<regex::Error> for ChunkingError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Chunking(ChunkingError::Regex(err.to_string()))
    }
}

impl From<serde_json::Error> for ContextError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Context(ContextError::Serialize(err.to_string()))
    }
}
