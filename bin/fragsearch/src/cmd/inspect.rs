//! Inspect command - summarize an index file

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use fragsearch_core::{Document, parse_index};

/// Summary of an index.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: usize,
    pub untitled: usize,
    pub empty_bodies: usize,
    pub html_chars: usize,
    pub duplicate_urls: Vec<String>,
}

impl IndexStats {
    /// Compute statistics over parsed documents.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut seen = HashSet::new();
        let mut stats = Self {
            documents: documents.len(),
            ..Self::default()
        };

        for doc in documents {
            if doc.title.trim().is_empty() {
                stats.untitled += 1;
            }
            if doc.html.trim().is_empty() {
                stats.empty_bodies += 1;
            }
            stats.html_chars += doc.html.chars().count();
            if !seen.insert(doc.url.as_str()) && !stats.duplicate_urls.contains(&doc.url) {
                stats.duplicate_urls.push(doc.url.clone());
            }
        }

        stats
    }
}

/// Run the inspect command.
///
/// Fails when the index cannot be parsed, or in strict mode when it has
/// duplicate URLs.
pub fn run(index: &Path, strict: bool) -> Result<()> {
    tracing::info!(?index, strict, "Inspecting index");

    let json = super::read_index(index)?;
    let documents =
        parse_index(&json).wrap_err_with(|| format!("Invalid index {}", index.display()))?;
    let stats = IndexStats::from_documents(&documents);

    println!("Index: {}", index.display());
    println!("  Documents:       {}", stats.documents);
    println!("  Untitled:        {}", stats.untitled);
    println!("  Empty bodies:    {}", stats.empty_bodies);
    println!("  Indexed chars:   {}", stats.html_chars);

    if !stats.duplicate_urls.is_empty() {
        println!();
        println!("Duplicate URLs:");
        for url in &stats.duplicate_urls {
            println!("  ⚠ {url}");
        }

        if strict {
            bail!(
                "Index has {} duplicate URL(s) (strict mode)",
                stats.duplicate_urls.len()
            );
        }
    }

    Ok(())
}
