//! Indexed documents and index body parsing.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    matches::FieldKey,
};

/// One indexed page or page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Rendered page body, matched as-is including markup.
    pub html: String,

    /// Canonical link to the page.
    pub url: String,
}

impl Document {
    /// Create a document.
    pub fn new(title: impl Into<String>, html: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            html: html.into(),
            url: url.into(),
        }
    }

    /// Value of a searchable field, `None` for keys documents do not carry.
    pub fn field(&self, key: &FieldKey) -> Option<&str> {
        match key {
            FieldKey::Title => Some(&self.title),
            FieldKey::Html => Some(&self.html),
            FieldKey::Other(_) => None,
        }
    }
}

/// Accepted shapes of the index resource.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndexBody {
    Documents(Vec<Document>),
    Pages { pages: Vec<Document> },
}

/// Parse an index body into its documents.
///
/// Accepts a bare JSON array of documents, or the `{ "pages": [...] }`
/// envelope written by the site generator.
pub fn parse_index(json: &str) -> Result<Vec<Document>> {
    let body: IndexBody = serde_json::from_str(json)?;
    let documents = match body {
        IndexBody::Documents(documents) => documents,
        IndexBody::Pages { pages } => pages,
    };
    tracing::debug!(documents = documents.len(), "parsed search index");
    Ok(documents)
}
