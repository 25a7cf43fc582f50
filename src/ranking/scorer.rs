//! Vector-similarity relevance scoring.
//!
//! Ranks chunks against a query using a term-frequency–inverse-document-
//! frequency vector space rebuilt from scratch on every call. There is no
//! persistent vocabulary: the document set for one scoring pass is exactly
//! `[query] + chunks`.

use crate::core::ScoredChunk;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Word tokens: lowercase runs of two or more word characters.
#[allow(clippy::expect_used)]
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// TF-IDF cosine-similarity scorer for a fixed query.
///
/// Scores are always in `[0, 1]`. A chunk sharing no vocabulary term with
/// the query scores exactly 0; a chunk whose vocabulary direction matches
/// the query's scores 1. Results come back in input order — the caller is
/// responsible for rank-sorting (see [`rank_descending`]).
///
/// # Examples
///
/// ```
/// use pagesieve::ranking::RelevanceScorer;
///
/// let scorer = RelevanceScorer::new("cat");
/// let chunks = vec!["cat cat cat".to_string(), "dog dog dog".to_string()];
/// let scored = scorer.score(&chunks);
/// assert!((scored[0].score - 1.0).abs() < 1e-9);
/// assert!(scored[1].score.abs() < 1e-9);
/// ```
///
/// [`rank_descending`]: crate::ranking::rank_descending
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    query: String,
}

impl RelevanceScorer {
    /// Creates a scorer for the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns the query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Scores every chunk against the query.
    ///
    /// The vector space (vocabulary and IDF weights) is recomputed from
    /// `[query] + chunks` on this exact call; nothing is cached across
    /// invocations. The returned list is in the same order as `chunks`.
    ///
    /// Term maps are ordered so floating-point accumulation follows a
    /// fixed order: repeated runs over identical input are bit-identical.
    #[must_use]
    pub fn score(&self, chunks: &[String]) -> Vec<ScoredChunk> {
        if chunks.is_empty() {
            return Vec::new();
        }

        // Document set: query first, then every chunk in corpus order.
        let mut documents: Vec<BTreeMap<String, usize>> = Vec::with_capacity(chunks.len() + 1);
        documents.push(term_counts(&self.query));
        for chunk in chunks {
            documents.push(term_counts(chunk));
        }

        // Document frequency over the full set.
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &documents {
            for term in doc.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Keeps every weight
        // strictly positive so shared-term chunks never vanish to zero.
        #[allow(clippy::cast_precision_loss)]
        let total = documents.len() as f64;
        let idf: BTreeMap<&str, f64> = df
            .iter()
            .map(|(term, count)| {
                #[allow(clippy::cast_precision_loss)]
                let weight = ((1.0 + total) / (1.0 + *count as f64)).ln() + 1.0;
                (*term, weight)
            })
            .collect();

        let vectors: Vec<BTreeMap<&str, f64>> =
            documents.iter().map(|doc| vectorize(doc, &idf)).collect();

        let query_vector = &vectors[0];
        chunks
            .iter()
            .zip(vectors.iter().skip(1))
            .map(|(chunk, vector)| {
                let similarity = sparse_dot(query_vector, vector).clamp(0.0, 1.0);
                ScoredChunk::new(chunk.clone(), similarity)
            })
            .collect()
    }
}

/// Counts word tokens in lowercased text.
fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for token in TOKEN_RE.find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Builds an L2-normalized TF-IDF vector for one document.
fn vectorize<'a>(
    counts: &'a BTreeMap<String, usize>,
    idf: &BTreeMap<&str, f64>,
) -> BTreeMap<&'a str, f64> {
    let mut vector: BTreeMap<&str, f64> = counts
        .iter()
        .map(|(term, count)| {
            #[allow(clippy::cast_precision_loss)]
            let tf = *count as f64;
            let weight = idf.get(term.as_str()).copied().unwrap_or(0.0);
            (term.as_str(), tf * weight)
        })
        .collect();

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
    vector
}

/// Dot product of two sparse unit vectors, iterating the smaller one.
fn sparse_dot(a: &BTreeMap<&str, f64>, b: &BTreeMap<&str, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum()
}
