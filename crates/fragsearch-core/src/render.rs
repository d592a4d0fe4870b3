//! Result item markup.

use crate::{
    error::Result,
    fragment::text_fragment_url,
    matches::Match,
    teaser::{TeaserOptions, build_teaser},
};

/// Render one search result: a deep link titled with the document title,
/// followed by the teaser excerpt.
pub fn render_result_item(found: &Match, options: &TeaserOptions) -> Result<String> {
    let teaser = build_teaser(found, options)?;
    let href = text_fragment_url(&found.item.url, &teaser.matched_text, &teaser.trailing_word);

    Ok(format!(
        r#"<div class="search-item"><a href="{href}">{title}</a><div>{excerpt}</div></div>"#,
        title = found.item.title,
        excerpt = teaser.excerpt_html,
    ))
}
