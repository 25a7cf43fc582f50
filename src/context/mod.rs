//! Corpus assembly from crawl records.
//!
//! The [`ContextBuilder`] turns one crawl record into a single flat text
//! corpus: serialized tables, then per-URL page metadata, then cleaned
//! markdown, concatenated in that fixed order.

pub mod markdown;
pub mod scrape;

pub use scrape::{MetadataScraper, PageMetadata};

use crate::core::CrawlRecord;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// One URL's contribution to the corpus: metadata on success, a
/// `{url, error}` record on failure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UrlRecord {
    /// Successful fetch.
    Metadata(PageMetadata),
    /// Isolated per-URL failure; the batch continues.
    Failed {
        /// URL that failed.
        url: String,
        /// Failure description.
        error: String,
    },
}

/// Assembles a flat text corpus from a crawl record.
///
/// # Examples
///
/// ```
/// use pagesieve::context::ContextBuilder;
/// use pagesieve::core::CrawlRecord;
///
/// let builder = ContextBuilder::without_fetch();
/// let record = CrawlRecord {
///     markdown: vec!["Some **scraped** text".to_string()],
///     ..Default::default()
/// };
/// let corpus = builder.build(&record).unwrap();
/// assert!(corpus.contains("Some scraped text"));
/// ```
pub struct ContextBuilder {
    scraper: Option<MetadataScraper>,
}

impl ContextBuilder {
    /// Creates a builder that fetches per-URL metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            scraper: Some(MetadataScraper::new()?),
        })
    }

    /// Creates a builder that skips the per-URL fetch stage entirely.
    ///
    /// Used for offline records and by tests.
    #[must_use]
    pub const fn without_fetch() -> Self {
        Self { scraper: None }
    }

    /// Builds the corpus for one crawl record.
    ///
    /// Per-URL fetch failures are isolated: each failed URL contributes a
    /// `{url, error}` record and the batch continues.
    pub fn build(&self, record: &CrawlRecord) -> Result<String> {
        let tables = flatten_tables(record)?;
        let urls = self.url_metadata(&record.urls)?;

        let mut corpus = String::with_capacity(tables.len() + urls.len());
        corpus.push_str(&tables);
        corpus.push_str(&urls);
        for md in &record.markdown {
            corpus.push_str(&markdown::clean(md));
        }

        debug!(
            tables = record.tables.len(),
            urls = record.urls.len(),
            markdown = record.markdown.len(),
            corpus_bytes = corpus.len(),
            "assembled corpus"
        );
        Ok(corpus)
    }

    /// Fetches metadata for every URL sequentially and serializes the
    /// results, failures included.
    fn url_metadata(&self, urls: &[String]) -> Result<String> {
        let mut records: Vec<UrlRecord> = Vec::with_capacity(urls.len());

        if let Some(scraper) = &self.scraper {
            for url in urls {
                match scraper.fetch(url) {
                    Ok(meta) => records.push(UrlRecord::Metadata(meta)),
                    Err(err) => {
                        warn!(url = %url, error = %err, "metadata fetch failed");
                        records.push(UrlRecord::Failed {
                            url: url.clone(),
                            error: err.to_string(),
                        });
                    }
                }
            }
        }

        Ok(serde_json::to_string(&records)?)
    }
}

/// Flattens all table rows across all pages into one serialized list.
fn flatten_tables(record: &CrawlRecord) -> Result<String> {
    let rows: Vec<&Value> = record.tables.iter().flatten().collect();
    Ok(serde_json::to_string(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tables_flatten_across_pages() {
        let record = CrawlRecord {
            tables: vec![
                vec![json!({"a": 1}), json!({"b": 2})],
                vec![json!({"c": 3})],
            ],
            ..Default::default()
        };
        let corpus = ContextBuilder::without_fetch().build(&record).unwrap();
        assert!(corpus.starts_with(r#"[{"a":1},{"b":2},{"c":3}]"#));
    }

    #[test]
    fn test_corpus_section_order() {
        let record = CrawlRecord {
            tables: vec![vec![json!("row")]],
            markdown: vec!["plain text".to_string()],
            ..Default::default()
        };
        let corpus = ContextBuilder::without_fetch().build(&record).unwrap();

        let tables_at = corpus.find(r#"["row"]"#).unwrap();
        let urls_at = corpus.find("[]").unwrap();
        let markdown_at = corpus.find("plain text").unwrap();
        assert!(tables_at < urls_at);
        assert!(urls_at < markdown_at);
    }

    #[test]
    fn test_markdown_strings_concatenated_in_order() {
        let record = CrawlRecord {
            markdown: vec!["first".to_string(), "second".to_string()],
            ..Default::default()
        };
        let corpus = ContextBuilder::without_fetch().build(&record).unwrap();
        assert!(corpus.ends_with("firstsecond"));
    }

    #[test]
    fn test_empty_record_produces_bracket_sections() {
        let corpus = ContextBuilder::without_fetch()
            .build(&CrawlRecord::default())
            .unwrap();
        assert_eq!(corpus, "[][]");
    }

    #[test]
    fn test_failed_url_record_serializes_url_and_error() {
        let failed = UrlRecord::Failed {
            url: "http://down.example".to_string(),
            error: "timeout".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["url"], "http://down.example");
        assert_eq!(value["error"], "timeout");
    }

    #[test]
    fn test_fetch_failures_are_isolated() {
        // Unreachable URL: the build continues and records the failure.
        let server = httpmock::MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/ok");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html><head><title>Up</title></head><body>fine</body></html>");
        });

        let record = CrawlRecord {
            urls: vec![server.url("/ok"), "http://127.0.0.1:9/down".to_string()],
            ..Default::default()
        };
        let corpus = ContextBuilder::new().unwrap().build(&record).unwrap();
        assert!(corpus.contains(r#""title":"Up""#));
        assert!(corpus.contains(r#""error""#));
    }
}
