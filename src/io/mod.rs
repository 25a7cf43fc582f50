//! I/O utilities for pagesieve.
//!
//! Provides file reading with memory mapping support for large crawl
//! records, plus the output writer used by the persist stage.

pub mod reader;

pub use reader::{FileReader, read_file, write_file};
