//! Match records and largest-span selection.
//!
//! The shapes mirror what a Fuse-style matcher reports with `includeMatches`
//! enabled, so matches produced in JavaScript deserialize into the same types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Searchable field of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKey {
    Title,
    Html,
    /// A key outside the known set, kept so callers can reject it explicitly.
    Other(String),
}

impl FieldKey {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Html => "html",
            FieldKey::Other(name) => name,
        }
    }
}

impl From<String> for FieldKey {
    fn from(value: String) -> Self {
        match value.as_str() {
            "title" => FieldKey::Title,
            "html" => FieldKey::Html,
            _ => FieldKey::Other(value),
        }
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        FieldKey::from(value.to_string())
    }
}

impl From<FieldKey> for String {
    fn from(key: FieldKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[start, stop]` char offsets into a field value.
///
/// Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    start: usize,
    stop: usize,
}

impl Span {
    /// Create a span.
    ///
    /// # Panics
    ///
    /// Panics if `stop < start`.
    pub fn new(start: usize, stop: usize) -> Self {
        assert!(stop >= start, "span stop {stop} precedes start {start}");
        Self { start, stop }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    /// Number of chars covered, `stop - start + 1`.
    pub fn len(&self) -> usize {
        self.stop - self.start + 1
    }

    /// Always false: a span covers at least one char.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<(usize, usize)> for Span {
    type Error = String;

    fn try_from((start, stop): (usize, usize)) -> Result<Self, Self::Error> {
        if stop < start {
            return Err(format!("span stop {stop} precedes start {start}"));
        }
        Ok(Self { start, stop })
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.stop)
    }
}

/// Spans matched in one field of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatchRecord {
    /// Field the spans belong to.
    pub key: FieldKey,

    /// Full value of the field.
    pub value: String,

    /// Matched spans in the order the matcher reported them.
    pub indices: Vec<Span>,
}

impl FieldMatchRecord {
    pub fn new(key: impl Into<FieldKey>, value: impl Into<String>, indices: Vec<Span>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            indices,
        }
    }
}

/// A document matched by a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// The matched document.
    pub item: Document,

    /// Position of the document in the index.
    #[serde(default)]
    pub ref_index: usize,

    /// Matcher score, higher is better.
    #[serde(default)]
    pub score: f64,

    /// Per-field match records.
    #[serde(default)]
    pub matches: Vec<FieldMatchRecord>,
}

/// The longest span of a match and the field it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LargestSpan<'a> {
    pub span: Span,
    pub field: &'a FieldMatchRecord,
}

/// Select the longest span across all field records of a match.
///
/// Fields are visited in order, then spans in order. A span only replaces the
/// current best when it is strictly longer, so the first of several
/// equally long spans wins. Returns `None` when the match has no spans.
pub fn select_largest_span(found: &Match) -> Option<LargestSpan<'_>> {
    found
        .matches
        .iter()
        .flat_map(|field| field.indices.iter().map(move |span| (*span, field)))
        .fold(None::<LargestSpan<'_>>, |best, (span, field)| match best {
            Some(best) if span.len() <= best.span.len() => Some(best),
            _ => Some(LargestSpan { span, field }),
        })
}
