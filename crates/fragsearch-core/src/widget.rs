//! Search-as-you-type controller.
//!
//! Owns nothing DOM-specific: the page surface is reached through
//! [`ResultsView`], implemented over `web-sys` in the browser and in memory
//! in tests.

use crate::{
    engine::SearchEngine,
    error::Result,
    render::render_result_item,
    teaser::TeaserOptions,
};

/// The list and visibility containers the widget writes to.
pub trait ResultsView {
    /// Remove every rendered result.
    fn clear(&mut self) -> Result<()>;

    /// Append one rendered result fragment as a list item.
    fn push_item(&mut self, markup: &str) -> Result<()>;

    /// Show or hide the results container.
    fn set_visible(&mut self, visible: bool) -> Result<()>;
}

/// Renders query results into a [`ResultsView`].
#[derive(Debug, Clone, Default)]
pub struct SearchWidget {
    teaser: TeaserOptions,
}

impl SearchWidget {
    pub fn new(teaser: TeaserOptions) -> Self {
        Self { teaser }
    }

    /// Replace the view's content with the results for `term`.
    ///
    /// Matches whose teaser cannot be built are skipped. The results
    /// container is shown iff at least one item was rendered. Returns the
    /// number of rendered items.
    pub fn refresh<V: ResultsView + ?Sized>(
        &self,
        engine: &SearchEngine,
        term: &str,
        view: &mut V,
    ) -> Result<usize> {
        view.clear()?;

        let mut rendered = 0;
        for found in engine.search(term) {
            match render_result_item(&found, &self.teaser) {
                Ok(markup) => {
                    view.push_item(&markup)?;
                    rendered += 1;
                }
                Err(err) => {
                    tracing::warn!(url = %found.item.url, error = %err, "skipping result without teaser");
                }
            }
        }

        view.set_visible(rendered > 0)?;
        Ok(rendered)
    }

    /// Hide and empty the results, used when no index is available.
    pub fn reset<V: ResultsView + ?Sized>(&self, view: &mut V) -> Result<()> {
        view.clear()?;
        view.set_visible(false)
    }
}
