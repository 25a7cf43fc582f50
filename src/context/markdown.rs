//! Markdown cleanup passes.
//!
//! Each pass is a function `&str -> String` applied in a fixed sequence.
//! The pipeline strips image syntax, rewrites links to plain text,
//! collapses whitespace, and splits concatenated camel-case runs left
//! behind by the scraper.

// Static patterns are literals; compilation is covered by the tests below.
#![allow(clippy::expect_used)]

use regex::Regex;
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("valid regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static CAMEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));

/// Runs the full cleanup pipeline on one markdown string.
///
/// Passes, in order: image syntax removed, `*` markers broken to
/// newlines, `[text](url)` rewritten as `text: url`, whitespace runs
/// collapsed to a single space, lower-to-upper letter boundaries split.
///
/// # Examples
///
/// ```
/// use pagesieve::context::markdown::clean;
///
/// let cleaned = clean("![logo](img.png) See [docs](https://example.com)");
/// assert_eq!(cleaned, "See docs: https://example.com");
/// ```
#[must_use]
pub fn clean(markdown: &str) -> String {
    let mut result = strip_images(markdown);
    result = result.replace('*', "\n");
    result = rewrite_links(&result);
    result = collapse_whitespace(&result);
    result = split_camel_case(&result);
    result.trim().to_string()
}

/// Removes image syntax `![alt](src)` entirely.
fn strip_images(md: &str) -> String {
    IMAGE_RE.replace_all(md, "").into_owned()
}

/// Rewrites link syntax `[text](url)` as `text: url`.
fn rewrite_links(md: &str) -> String {
    LINK_RE.replace_all(md, "$1: $2").into_owned()
}

/// Collapses every whitespace run to a single space.
fn collapse_whitespace(md: &str) -> String {
    WHITESPACE_RE.replace_all(md, " ").into_owned()
}

/// Inserts a space at lower-to-upper letter boundaries.
///
/// Heuristic repair for words the scraper concatenated, e.g.
/// `"aboutUs"` becomes `"about Us"`.
fn split_camel_case(md: &str) -> String {
    CAMEL_RE.replace_all(md, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("![alt](img.png)", ""; "image removed")]
    #[test_case("pre ![a](b) post", "pre post"; "image removed inline")]
    #[test_case("[text](http://x)", "text: http://x"; "link rewritten")]
    #[test_case("a   b\t\nc", "a b c"; "whitespace collapsed")]
    #[test_case("aboutUs", "about Us"; "camel case split")]
    #[test_case("  padded  ", "padded"; "trimmed")]
    #[test_case("", ""; "empty input")]
    fn test_clean(input: &str, expected: &str) {
        assert_eq!(clean(input), expected);
    }

    #[test]
    fn test_star_markers_become_breaks() {
        // '*' is replaced before whitespace collapse, so emphasis and
        // bullet markers end up as single spaces.
        assert_eq!(clean("a *bold* b"), "a bold b");
        assert_eq!(clean("* item one\n* item two"), "item one item two");
    }

    #[test]
    fn test_image_stripped_before_link_rewrite() {
        // The image pass must run first or the link pass would turn
        // `![a](b)` into `!a: b`.
        assert_eq!(clean("![a](b)[c](d)"), "c: d");
    }

    #[test]
    fn test_camel_split_after_collapse() {
        assert_eq!(clean("theEnd of oneStory"), "the End of one Story");
    }

    #[test]
    fn test_consecutive_camel_boundaries() {
        // Non-overlapping matches: alternating case splits every other
        // boundary, mirroring the scraper heuristic's known behavior.
        assert_eq!(clean("aBcD"), "a Bc D");
    }

    #[test]
    fn test_multiline_markdown() {
        let md = "# Title\n\nSome [link](http://example.com) and ![img](x.png)\n\n* bullet";
        assert_eq!(clean(md), "# Title Some link: http://example.com and bullet");
    }
}
