//! Query execution over the loaded documents.
//!
//! Scoring is delegated to the skim algorithm from `fuzzy-matcher`. This module
//! only configures it and turns the matched char positions into Fuse-style
//! field match records.

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use serde::{Deserialize, Serialize};

use crate::{
    document::Document,
    error::{Result, SearchError},
    matches::{FieldKey, FieldMatchRecord, Match, Span},
};

/// Matching options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Document fields searched, in the order their records are reported.
    #[serde(default = "default_keys")]
    pub keys: Vec<FieldKey>,

    /// Report matched spans with each result.
    #[serde(default = "default_true")]
    pub include_matches: bool,

    /// Shortest query, and shortest contiguous run, that counts as a match.
    #[serde(default = "default_min_match_char_length")]
    pub min_match_char_length: usize,

    /// Accept matches anywhere in a field.
    #[serde(default = "default_true")]
    pub ignore_location: bool,

    /// Expected match position when `ignore_location` is off.
    #[serde(default)]
    pub location: usize,

    /// How far past `location` a match may start when `ignore_location` is off.
    #[serde(default = "default_distance")]
    pub distance: usize,

    /// Match case exactly.
    #[serde(default)]
    pub case_sensitive: bool,

    /// Maximum number of results.
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_keys() -> Vec<FieldKey> {
    vec![FieldKey::Title, FieldKey::Html]
}

fn default_true() -> bool {
    true
}

fn default_min_match_char_length() -> usize {
    3
}

fn default_distance() -> usize {
    100
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: default_keys(),
            include_matches: true,
            min_match_char_length: default_min_match_char_length(),
            ignore_location: true,
            location: 0,
            distance: default_distance(),
            case_sensitive: false,
            limit: None,
        }
    }
}

impl SearchOptions {
    /// Validate the options.
    pub fn validate(&self) -> Result<()> {
        if self.keys.is_empty() {
            return Err(SearchError::config("search.keys cannot be empty"));
        }

        if let Some(key) = self.keys.iter().find(|k| matches!(k, FieldKey::Other(_))) {
            return Err(SearchError::config(format!(
                "search.keys contains unsupported field `{key}`"
            )));
        }

        if self.min_match_char_length == 0 {
            return Err(SearchError::config(
                "search.min_match_char_length must be at least 1",
            ));
        }

        Ok(())
    }
}

/// In-memory search engine over an immutable document set.
pub struct SearchEngine {
    documents: Vec<Document>,
    options: SearchOptions,
    matcher: SkimMatcherV2,
}

impl SearchEngine {
    /// Create an engine over `documents`.
    pub fn new(documents: Vec<Document>, options: SearchOptions) -> Result<Self> {
        options.validate()?;

        let matcher = if options.case_sensitive {
            SkimMatcherV2::default().respect_case()
        } else {
            SkimMatcherV2::default().ignore_case()
        };

        Ok(Self {
            documents,
            options,
            matcher,
        })
    }

    /// Parse an index body and build an engine over it.
    pub fn from_json(json: &str, options: SearchOptions) -> Result<Self> {
        let documents = crate::document::parse_index(json)?;
        Self::new(documents, options)
    }

    /// Search all documents for `term`.
    ///
    /// Empty, blank or too-short terms yield no matches. Results are ordered
    /// by matcher score, best first; equal scores keep index order.
    pub fn search(&self, term: &str) -> Vec<Match> {
        if term.trim().is_empty() || term.chars().count() < self.options.min_match_char_length {
            return Vec::new();
        }

        let mut results: Vec<Match> = self
            .documents
            .iter()
            .enumerate()
            .filter_map(|(ref_index, doc)| self.match_document(ref_index, doc, term))
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        if let Some(limit) = self.options.limit {
            results.truncate(limit);
        }

        tracing::debug!(term, results = results.len(), "search completed");
        results
    }

    fn match_document(&self, ref_index: usize, doc: &Document, term: &str) -> Option<Match> {
        let mut best_score: Option<i64> = None;
        let mut records = Vec::new();

        for key in &self.options.keys {
            let Some(value) = doc.field(key) else {
                continue;
            };
            let Some((score, positions)) = self.matcher.fuzzy_indices(value, term) else {
                continue;
            };

            if !self.options.ignore_location {
                let first = positions.first().copied().unwrap_or(0);
                if first > self.options.location + self.options.distance {
                    continue;
                }
            }

            // scattered alignments with no run of the minimum length do not count
            let indices = contiguous_spans(&positions, self.options.min_match_char_length);
            if indices.is_empty() {
                continue;
            }

            best_score = Some(best_score.map_or(score, |best| best.max(score)));
            if self.options.include_matches {
                records.push(FieldMatchRecord::new(key.clone(), value, indices));
            }
        }

        best_score.map(|score| Match {
            item: doc.clone(),
            ref_index,
            score: score as f64,
            matches: records,
        })
    }

    /// Get the indexed documents.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Get document count.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Get the options the engine was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

/// Collapse ascending char positions into runs of at least `min_len` chars.
fn contiguous_spans(positions: &[usize], min_len: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let Some((&first, rest)) = positions.split_first() else {
        return spans;
    };

    let (mut start, mut stop) = (first, first);
    for &pos in rest {
        if pos == stop + 1 {
            stop = pos;
            continue;
        }
        if stop - start + 1 >= min_len {
            spans.push(Span::new(start, stop));
        }
        start = pos;
        stop = pos;
    }
    if stop - start + 1 >= min_len {
        spans.push(Span::new(start, stop));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_engine() -> SearchEngine {
        let documents = vec![
            Document::new(
                "Animals",
                "The quick brown fox jumps",
                "/animals/",
            ),
            Document::new(
                "Installing the toolchain",
                "<p>Download the installer and run it.</p>",
                "/install/",
            ),
        ];
        SearchEngine::new(documents, SearchOptions::default()).unwrap()
    }

    #[test]
    fn test_contiguous_spans() {
        assert_eq!(
            contiguous_spans(&[0, 1, 2, 5, 7, 8, 9, 10], 3),
            vec![Span::new(0, 2), Span::new(7, 10)]
        );
        assert_eq!(contiguous_spans(&[4, 6, 8], 1).len(), 3);
        assert!(contiguous_spans(&[], 3).is_empty());
    }

    #[test]
    fn test_search_finds_substring() {
        let engine = create_test_engine();
        let results = engine.search("quick");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.url, "/animals/");
        assert_eq!(results[0].ref_index, 0);

        let html = results[0]
            .matches
            .iter()
            .find(|r| r.key == FieldKey::Html)
            .unwrap();
        assert_eq!(html.indices, vec![Span::new(4, 8)]);
        assert_eq!(html.value, "The quick brown fox jumps");
    }

    #[test]
    fn test_search_ignores_case_by_default() {
        let engine = create_test_engine();
        assert_eq!(engine.search("QUICK").len(), 1);
    }

    #[test]
    fn test_search_empty_and_short_terms() {
        let engine = create_test_engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert!(engine.search("qu").is_empty());
    }

    #[test]
    fn test_search_no_results() {
        let engine = create_test_engine();
        assert!(engine.search("zebra").is_empty());
    }

    #[test]
    fn test_search_without_match_reporting() {
        let options = SearchOptions {
            include_matches: false,
            ..SearchOptions::default()
        };
        let engine = SearchEngine::new(
            vec![Document::new("Animals", "The quick brown fox", "/a/")],
            options,
        )
        .unwrap();

        let results = engine.search("quick");
        assert_eq!(results.len(), 1);
        assert!(results[0].matches.is_empty());
    }

    #[test]
    fn test_search_respects_location_when_enabled() {
        let body = format!("{}needle", "x".repeat(300));
        let options = SearchOptions {
            ignore_location: false,
            keys: vec![FieldKey::Html],
            ..SearchOptions::default()
        };
        let engine = SearchEngine::new(vec![Document::new("", body, "/far/")], options).unwrap();

        assert!(engine.search("needle").is_empty());
    }

    #[test]
    fn test_search_limit() {
        let documents = (0..5)
            .map(|i| Document::new(format!("Page {i}"), "shared words here", format!("/{i}/")))
            .collect();
        let options = SearchOptions {
            limit: Some(2),
            ..SearchOptions::default()
        };
        let engine = SearchEngine::new(documents, options).unwrap();

        assert_eq!(engine.search("shared").len(), 2);
    }

    #[test]
    fn test_search_skips_scattered_alignments() {
        let engine = SearchEngine::new(
            vec![Document::new("", "a big red oak stood there", "/oak/")],
            SearchOptions::default(),
        )
        .unwrap();

        assert!(engine.search("bro").is_empty());
    }

    #[test]
    fn test_search_limit_keeps_only_real_matches() {
        let mut documents: Vec<Document> = (0..3)
            .map(|i| Document::new("", "a big red oak stood there", format!("/oak{i}/")))
            .collect();
        documents.push(Document::new("", "the brown bear", "/bear/"));
        let options = SearchOptions {
            limit: Some(3),
            ..SearchOptions::default()
        };
        let engine = SearchEngine::new(documents, options).unwrap();

        let results = engine.search("bro");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.url, "/bear/");
        assert!(!results[0].matches.is_empty());
    }

    #[test]
    fn test_options_reject_unknown_key() {
        let options = SearchOptions {
            keys: vec![FieldKey::Title, FieldKey::Other("tags".into())],
            ..SearchOptions::default()
        };
        let err = SearchEngine::new(Vec::new(), options).err().unwrap();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.keys, vec![FieldKey::Title, FieldKey::Html]);
        assert!(options.include_matches);
        assert_eq!(options.min_match_char_length, 3);
        assert!(options.ignore_location);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"title": "Rust", "html": "<p>ownership</p>", "url": "/rust/"}]"#;
        let engine = SearchEngine::from_json(json, SearchOptions::default()).unwrap();
        assert_eq!(engine.document_count(), 1);
    }
}
