//! Per-URL metadata scraping.
//!
//! A secondary fetch + HTML parse per crawled URL, extracting the page
//! metadata the corpus carries alongside tables and markdown. Fetching is
//! strictly sequential, one URL at a time, with each request bounded by
//! its own timeout; a failed URL is isolated, not fatal to the batch.

use crate::error::{ContextError, Result};
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").expect("valid regex")
});

#[allow(clippy::expect_used)]
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-\(\) ]{7,}\d").expect("valid regex"));

/// User-Agent string for metadata requests.
pub const USER_AGENT: &str = concat!("pagesieve/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout for metadata fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of leading visible-text words kept as the page summary.
const SUMMARY_WORDS: usize = 100;

/// Placeholder when a page carries no `<title>`.
const NO_TITLE: &str = "No title";

/// Placeholder when a page carries no meta description.
const NO_DESCRIPTION: &str = "No description";

/// Metadata extracted from one fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Source URL.
    pub url: String,
    /// `<title>` text, or a placeholder.
    pub title: String,
    /// Meta description, or a placeholder.
    pub description: String,
    /// First visible-text words after stripping script/style.
    pub summary: String,
    /// H1/H2/H3 heading text in document order.
    pub headers: HeadingOutline,
    /// Email addresses found in the visible text, de-duplicated.
    pub emails: Vec<String>,
    /// Phone numbers found in the visible text, de-duplicated.
    pub phones: Vec<String>,
}

/// Heading text grouped by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingOutline {
    /// H1 headings.
    pub h1: Vec<String>,
    /// H2 headings.
    pub h2: Vec<String>,
    /// H3 headings.
    pub h3: Vec<String>,
}

/// Compiled selectors reused across pages.
struct Selectors {
    title: Selector,
    description: Selector,
    h1: Selector,
    h2: Selector,
    h3: Selector,
    body: Selector,
    hidden: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            title: parse_selector("title")?,
            description: parse_selector(r#"meta[name="description"]"#)?,
            h1: parse_selector("h1")?,
            h2: parse_selector("h2")?,
            h3: parse_selector("h3")?,
            body: parse_selector("body")?,
            hidden: parse_selector("script, style")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ContextError::Selector(e.to_string()).into())
}

/// Sequential per-URL metadata scraper.
///
/// Builds its HTTP client, selectors, and extraction patterns once at
/// construction; [`fetch`](Self::fetch) then performs one blocking
/// request per call.
///
/// # Examples
///
/// ```no_run
/// use pagesieve::context::MetadataScraper;
///
/// let scraper = MetadataScraper::new().unwrap();
/// let meta = scraper.fetch("https://example.com").unwrap();
/// assert!(!meta.title.is_empty());
/// ```
pub struct MetadataScraper {
    client: reqwest::blocking::Client,
    selectors: Selectors,
}

impl MetadataScraper {
    /// Creates a scraper with a fresh blocking HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Client`] if the client cannot be built,
    /// or [`ContextError::Selector`] for selector compilation failures.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ContextError::Client(e.to_string()))?;

        Ok(Self {
            client,
            selectors: Selectors::compile()?,
        })
    }

    /// Fetches one URL and extracts its metadata.
    ///
    /// The response body is parsed regardless of status code; a page that
    /// serves an error document still yields its visible metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Fetch`] if the request fails or the body
    /// cannot be read. Callers isolate this per URL.
    pub fn fetch(&self, url: &str) -> Result<PageMetadata> {
        let response = self.client.get(url).send().map_err(|e| ContextError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let html = response.text().map_err(|e| ContextError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.parse(url, &html))
    }

    /// Extracts metadata from already-fetched HTML.
    #[must_use]
    pub fn parse(&self, url: &str, html: &str) -> PageMetadata {
        let doc = Html::parse_document(html);

        let title = first_text(&doc, &self.selectors.title)
            .unwrap_or_else(|| NO_TITLE.to_string());

        let description = doc
            .select(&self.selectors.description)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let headers = HeadingOutline {
            h1: all_text(&doc, &self.selectors.h1),
            h2: all_text(&doc, &self.selectors.h2),
            h3: all_text(&doc, &self.selectors.h3),
        };

        let visible = self.visible_text(&doc);
        let summary = visible
            .split_whitespace()
            .take(SUMMARY_WORDS)
            .collect::<Vec<_>>()
            .join(" ");

        let emails = extract_unique(&EMAIL_RE, &visible);
        let phones = extract_unique(&PHONE_RE, &visible);

        PageMetadata {
            url: url.to_string(),
            title,
            description,
            summary,
            headers,
            emails,
            phones,
        }
    }

    /// Visible body text with script/style subtrees removed.
    fn visible_text(&self, doc: &Html) -> String {
        let body_html = doc
            .select(&self.selectors.body)
            .next()
            .map_or_else(|| doc.root_element().inner_html(), |body| body.inner_html());

        // Drop hidden subtrees textually, then re-read the fragment.
        let fragment = Html::parse_fragment(&body_html);
        let mut stripped = body_html;
        for el in fragment.select(&self.selectors.hidden) {
            stripped = stripped.replace(&el.html(), "");
        }

        let visible = Html::parse_fragment(&stripped);
        visible
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// First matching element's trimmed text, if any and non-empty.
fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Trimmed text of every matching element, in document order.
fn all_text(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| {
            el.text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Regex matches de-duplicated in first-occurrence order.
fn extract_unique(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for found in re.find_iter(text) {
        if seen.insert(found.as_str()) {
            out.push(found.as_str().to_string());
        }
    }
    out
}
