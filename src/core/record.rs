//! Crawl record input schema.
//!
//! A [`CrawlRecord`] is the persisted output of the external crawler: the
//! URL list, tabular data, and HTML-derived markdown for one crawl session.
//! This crate only consumes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One crawl session's raw page content, as produced by the crawler.
///
/// All fields default so a partial record still loads; a missing or
/// unparsable file degrades to `CrawlRecord::default()` at the pipeline
/// boundary rather than aborting.
///
/// # Examples
///
/// ```
/// use pagesieve::core::CrawlRecord;
///
/// let record: CrawlRecord = serde_json::from_str(
///     r##"{"URLS": [], "tables": [], "markdown": ["# Title"]}"##,
/// ).unwrap();
/// assert_eq!(record.markdown.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlRecord {
    /// Pages visited during the crawl, in crawl order.
    #[serde(rename = "URLS", default)]
    pub urls: Vec<String>,

    /// Tabular data per page: one list of opaque row objects per table.
    #[serde(default)]
    pub tables: Vec<Vec<Value>>,

    /// HTML-derived markdown, one string per page.
    #[serde(default)]
    pub markdown: Vec<String>,
}

impl CrawlRecord {
    /// Returns `true` if the record carries no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.tables.is_empty() && self.markdown.is_empty()
    }
}
