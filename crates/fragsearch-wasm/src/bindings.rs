//! JavaScript API over the core engine and teaser builder.

use fragsearch_core::{
    Match, SearchEngine, TeaserOptions, build_teaser, render_result_item,
};
use wasm_bindgen::prelude::*;

use crate::{dom::config_from_js, js_error, loader::fetch_index};

/// A loaded search index for direct use from JavaScript.
#[wasm_bindgen]
pub struct SearchIndex {
    engine: SearchEngine,
    teaser: TeaserOptions,
}

#[wasm_bindgen]
impl SearchIndex {
    /// Load an index from a URL.
    #[wasm_bindgen(js_name = load)]
    pub async fn load(index_url: String, options: JsValue) -> Result<SearchIndex, JsValue> {
        let config = config_from_js(options)?;
        let engine = fetch_index(&index_url, config.search)
            .await
            .map_err(js_error)?;

        Ok(Self {
            engine,
            teaser: config.teaser,
        })
    }

    /// Create from a JSON string (for testing).
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, options: JsValue) -> Result<SearchIndex, JsValue> {
        let config = config_from_js(options)?;
        let engine = SearchEngine::from_json(json, config.search).map_err(js_error)?;

        Ok(Self {
            engine,
            teaser: config.teaser,
        })
    }

    /// Search the index, returning Fuse-shaped match objects.
    pub fn search(&self, term: &str) -> Result<JsValue, JsValue> {
        let matches = self.engine.search(term);
        serde_wasm_bindgen::to_value(&matches).map_err(js_error)
    }

    /// Search and render every result that has a teaser.
    #[wasm_bindgen(js_name = renderResults)]
    pub fn render_results(&self, term: &str) -> Vec<String> {
        self.engine
            .search(term)
            .iter()
            .filter_map(|found| match render_result_item(found, &self.teaser) {
                Ok(markup) => Some(markup),
                Err(err) => {
                    log::warn!("skipping {}: {err}", found.item.url);
                    None
                }
            })
            .collect()
    }

    /// Get the number of indexed documents.
    #[wasm_bindgen(js_name = documentCount)]
    pub fn document_count(&self) -> usize {
        self.engine.document_count()
    }
}

/// Build `{ excerptHtml, matchedText, trailingWord }` for a match object.
///
/// `options` takes the `teaser` section of the widget options and may be
/// omitted. Span offsets count chars, not UTF-16 code units, so matches
/// produced by a JS matcher over non-BMP text must be converted first.
#[wasm_bindgen(js_name = buildTeaser)]
pub fn build_teaser_js(found: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let found: Match = serde_wasm_bindgen::from_value(found).map_err(js_error)?;
    let options = teaser_options_from_js(options)?;
    let teaser = build_teaser(&found, &options).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&teaser).map_err(js_error)
}

/// Render the result markup for a match object.
///
/// Takes the same optional teaser options as `buildTeaser`.
#[wasm_bindgen(js_name = renderResultItem)]
pub fn render_result_item_js(found: JsValue, options: JsValue) -> Result<String, JsValue> {
    let found: Match = serde_wasm_bindgen::from_value(found).map_err(js_error)?;
    let options = teaser_options_from_js(options)?;
    render_result_item(&found, &options).map_err(js_error)
}

fn teaser_options_from_js(options: JsValue) -> Result<TeaserOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(TeaserOptions::default());
    }

    serde_wasm_bindgen::from_value(options).map_err(js_error)
}
