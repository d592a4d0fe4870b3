//! fragsearch WASM Runtime
//!
//! Browser-side search-as-you-type widget using WebAssembly.
//!
//! # Features
//!
//! - **mountSearch**: wires a search box to a lazily loaded `/index.json`
//! - **SearchIndex**: query an index directly from JavaScript
//! - **buildTeaser / renderResultItem**: teaser extraction for Fuse-shaped matches
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { mountSearch } from 'fragsearch-wasm';
//!
//! await init();
//!
//! // Uses .search-input, .search-list and .search-results by default
//! mountSearch({ index_url: '/index.json' });
//! ```

pub mod bindings;
pub mod dom;
pub mod loader;

pub use bindings::{SearchIndex, build_teaser_js, render_result_item_js};
pub use dom::{DomView, mount_search};
pub use loader::fetch_index;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hook for better error messages in the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the search library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Route `log` records (and `tracing` events from the core crate) to the
/// browser console. Only the first call installs the logger.
pub fn init_logging(level: &str) {
    let level = parse_level(level);
    if console_log::init_with_level(level).is_ok() {
        log::debug!("console logging enabled at {level}");
    }
}

fn parse_level(level: &str) -> log::Level {
    level.parse().unwrap_or(log::Level::Info)
}

/// Convert an error into the string value thrown to JavaScript.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
