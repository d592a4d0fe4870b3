//! Teaser extraction.
//!
//! A teaser is built around the longest span of a match: the matched text,
//! the word glued to its end (used to disambiguate the text fragment), and an
//! excerpt with the match emphasized in the middle of its context.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SearchError},
    matches::{FieldKey, Match, select_largest_span},
};

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("markup tag pattern is valid"));

/// Excerpt rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaserOptions {
    /// Chars of context kept on each side of the match.
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,

    /// Markup inserted before the matched text.
    #[serde(default = "default_emphasis_open")]
    pub emphasis_open: String,

    /// Markup inserted after the matched text.
    #[serde(default = "default_emphasis_close")]
    pub emphasis_close: String,
}

fn default_context_chars() -> usize {
    60
}

fn default_emphasis_open() -> String {
    r#"<b style="text-decoration: underline;">"#.to_string()
}

fn default_emphasis_close() -> String {
    "</b>".to_string()
}

impl Default for TeaserOptions {
    fn default() -> Self {
        Self {
            context_chars: default_context_chars(),
            emphasis_open: default_emphasis_open(),
            emphasis_close: default_emphasis_close(),
        }
    }
}

/// Excerpt and link metadata for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teaser {
    /// Excerpt markup. Field markup passes through unescaped.
    pub excerpt_html: String,

    /// Text the destination page should scroll to.
    pub matched_text: String,

    /// Word following the match, empty when none is glued to it.
    pub trailing_word: String,
}

/// Build the teaser for a match.
pub fn build_teaser(found: &Match, options: &TeaserOptions) -> Result<Teaser> {
    let largest = select_largest_span(found).ok_or_else(|| SearchError::NoMatchedSpan {
        url: found.item.url.clone(),
    })?;
    let value = largest.field.value.as_str();
    let span = largest.span;

    match &largest.field.key {
        FieldKey::Title => Ok(Teaser {
            excerpt_html: format!("<h1> {value} </h1>"),
            matched_text: value.to_string(),
            trailing_word: String::new(),
        }),
        FieldKey::Html => {
            // bounds[i] is the byte offset of char i; the last entry is value.len()
            let bounds: Vec<usize> = value
                .char_indices()
                .map(|(offset, _)| offset)
                .chain(std::iter::once(value.len()))
                .collect();
            let char_len = bounds.len() - 1;

            if span.stop() >= char_len {
                return Err(SearchError::SpanOutOfRange {
                    start: span.start(),
                    stop: span.stop(),
                    len: char_len,
                });
            }

            let match_start = bounds[span.start()];
            let match_end = bounds[span.stop() + 1];
            let context_start = bounds[span.start().saturating_sub(options.context_chars)];
            let context_end = bounds[(span.stop() + 1 + options.context_chars).min(char_len)];

            let matched_text = &value[match_start..match_end];
            let trailing_word = trailing_word(&value[match_end..]);

            let excerpt_html = format!(
                "{}{}{}{}{}",
                &value[context_start..match_start],
                options.emphasis_open,
                matched_text,
                options.emphasis_close,
                &value[match_end..context_end],
            );

            Ok(Teaser {
                excerpt_html,
                matched_text: matched_text.to_string(),
                trailing_word,
            })
        }
        FieldKey::Other(key) => Err(SearchError::UnsupportedField(key.clone())),
    }
}

/// Chars up to the first whitespace, with markup tags removed.
fn trailing_word(rest: &str) -> String {
    let word = rest.split(char::is_whitespace).next().unwrap_or("");
    MARKUP_TAG.replace_all(word, "").into_owned()
}
