//! DOM wiring for the search box.
//!
//! Every key release in the search input loads the index (once per page
//! session), runs the query and replaces the result list.

use std::{cell::RefCell, rc::Rc};

use fragsearch_core::{
    Config, ResultsView, SearchEngine, SearchError, SearchWidget, SingleFlight,
};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::{init_logging, js_error, loader::fetch_index};

/// Result list and results container backed by DOM elements.
pub struct DomView {
    document: Document,
    list: Element,
    results: HtmlElement,
}

impl DomView {
    /// Look up the list and container elements by selector.
    pub fn new(
        document: &Document,
        list_selector: &str,
        results_selector: &str,
    ) -> Result<Self, JsValue> {
        let list = select(document, list_selector)?;
        let results = select(document, results_selector)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                JsValue::from_str(&format!("`{results_selector}` is not an HTML element"))
            })?;

        Ok(Self {
            document: document.clone(),
            list,
            results,
        })
    }
}

fn view_error(value: JsValue) -> SearchError {
    SearchError::view(format!("{value:?}"))
}

impl ResultsView for DomView {
    fn clear(&mut self) -> fragsearch_core::Result<()> {
        self.list.set_inner_html("");
        Ok(())
    }

    fn push_item(&mut self, markup: &str) -> fragsearch_core::Result<()> {
        let item = self.document.create_element("li").map_err(view_error)?;
        item.set_inner_html(markup);
        self.list.append_child(&item).map_err(view_error)?;
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> fragsearch_core::Result<()> {
        let display = if visible { "block" } else { "none" };
        self.results
            .style()
            .set_property("display", display)
            .map_err(view_error)
    }
}

/// Page-lifetime state shared by all keystroke handlers.
struct SearchSession {
    config: Config,
    engine: SingleFlight<SearchEngine, SearchError>,
    widget: SearchWidget,
    input: HtmlInputElement,
    view: RefCell<DomView>,
}

impl SearchSession {
    async fn on_keyup(&self) {
        let index_url = self.config.index_url.clone();
        let options = self.config.search.clone();
        let loaded = self
            .engine
            .get_or_load(|| async move { fetch_index(&index_url, options).await })
            .await;

        let mut view = self.view.borrow_mut();
        let outcome = match loaded {
            Ok(engine) => {
                // read the box now: keystrokes queued behind the load all render the latest term
                let term = self.input.value();
                self.widget.refresh(&engine, &term, &mut *view).map(|_| ())
            }
            Err(err) => {
                log::error!("search index unavailable: {err}");
                self.widget.reset(&mut *view)
            }
        };

        if let Err(err) = outcome {
            log::warn!("failed to update search results: {err}");
        }
    }
}

/// Attach the search widget to the page.
///
/// `options` follows the core `Config` structure; `undefined` or `null` uses
/// the defaults (`/index.json`, `.search-input`, `.search-list`,
/// `.search-results`).
#[wasm_bindgen(js_name = mountSearch)]
pub fn mount_search(options: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(options)?;
    init_logging(&config.log_level);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let input = select(&document, &config.input_selector)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| {
            JsValue::from_str(&format!("`{}` is not an input element", config.input_selector))
        })?;
    let view = DomView::new(&document, &config.list_selector, &config.results_selector)?;

    let session = Rc::new(SearchSession {
        widget: SearchWidget::new(config.teaser.clone()),
        config,
        engine: SingleFlight::new(),
        input: input.clone(),
        view: RefCell::new(view),
    });

    let handler = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |_ev: web_sys::KeyboardEvent| {
        let session = Rc::clone(&session);
        wasm_bindgen_futures::spawn_local(async move {
            session.on_keyup().await;
        });
    });

    input.add_event_listener_with_callback("keyup", handler.as_ref().unchecked_ref())?;

    // The listener lives for the page session
    handler.forget();

    log::debug!("search widget mounted");
    Ok(())
}

/// Read widget configuration passed from JavaScript.
pub(crate) fn config_from_js(options: JsValue) -> Result<Config, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(Config::default());
    }

    let config: Config = serde_wasm_bindgen::from_value(options).map_err(js_error)?;
    config.validate().map_err(js_error)?;
    Ok(config)
}

fn select(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches `{selector}`")))
}
