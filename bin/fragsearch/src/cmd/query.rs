//! Query command - run a search against an index file

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use fragsearch_core::{
    Config, SearchEngine, TeaserOptions, build_teaser, render_result_item, text_fragment_url,
};
use serde::Serialize;

/// Output format of the query command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// The result markup the widget would insert
    Html,
    /// One JSON array of results
    Json,
}

/// One rendered search result.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRow {
    pub title: String,
    pub url: String,
    pub link: String,
    pub matched_text: String,
    pub trailing_word: String,
    pub excerpt_html: String,
    pub markup: String,
    pub score: f64,
}

/// Run the query command.
pub fn run(
    config_path: &Path,
    index: &Path,
    term: &str,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    tracing::info!(?config_path, ?index, term, "Running query");

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
    if let Some(limit) = limit {
        config.search.limit = Some(limit);
    }

    let json = super::read_index(index)?;
    let engine = SearchEngine::from_json(&json, config.search.clone())
        .wrap_err_with(|| format!("Failed to load index {}", index.display()))?;

    let rows = collect_rows(&engine, term, &config.teaser);
    println!("{}", format_rows(&rows, term, format)?);

    Ok(())
}

/// Search and build one row per result that has a teaser.
pub fn collect_rows(engine: &SearchEngine, term: &str, teaser: &TeaserOptions) -> Vec<QueryRow> {
    let mut rows = Vec::new();

    for found in engine.search(term) {
        let built = build_teaser(&found, teaser).and_then(|t| {
            let markup = render_result_item(&found, teaser)?;
            Ok((t, markup))
        });

        match built {
            Ok((t, markup)) => rows.push(QueryRow {
                title: found.item.title.clone(),
                url: found.item.url.clone(),
                link: text_fragment_url(&found.item.url, &t.matched_text, &t.trailing_word),
                matched_text: t.matched_text,
                trailing_word: t.trailing_word,
                excerpt_html: t.excerpt_html,
                markup,
                score: found.score,
            }),
            Err(e) => tracing::warn!(url = %found.item.url, error = %e, "Skipping result"),
        }
    }

    rows
}

/// Format rows for printing.
pub fn format_rows(rows: &[QueryRow], term: &str, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Html => rows
            .iter()
            .map(|row| format!("<li>{}</li>", row.markup))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Text => {
            if rows.is_empty() {
                return Ok(format!("No results for \"{term}\""));
            }

            let mut out = format!("{} result(s) for \"{term}\"\n", rows.len());
            for (i, row) in rows.iter().enumerate() {
                out.push_str(&format!("\n{}. {}\n", i + 1, display_title(row)));
                out.push_str(&format!("   link:  {}\n", row.link));
                out.push_str(&format!("   match: {}", row.matched_text));
                if !row.trailing_word.is_empty() {
                    out.push_str(&format!(" (followed by \"{}\")", row.trailing_word));
                }
                out.push('\n');
            }
            out
        }
    };

    Ok(output)
}

fn display_title(row: &QueryRow) -> &str {
    if row.title.is_empty() {
        &row.url
    } else {
        &row.title
    }
}
