//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use fragsearch_core::{Document, FieldMatchRecord, Match, Span, Teaser, TeaserOptions};
use fragsearch_wasm::{SearchIndex, build_teaser_js, render_result_item_js};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const INDEX: &str = r#"[
    {"title": "Animals", "html": "The quick brown fox jumps", "url": "/animals/"},
    {"title": "Release notes", "html": "<p>Fixed the documentation pages.</p>", "url": "/releases/"}
]"#;

fn quick_match() -> JsValue {
    let found = Match {
        item: Document::new("Animals", "The quick brown fox jumps", "/animals/"),
        ref_index: 0,
        score: 0.0,
        matches: vec![FieldMatchRecord::new(
            "html",
            "The quick brown fox jumps",
            vec![Span::new(4, 8)],
        )],
    };
    serde_wasm_bindgen::to_value(&found).unwrap()
}

#[wasm_bindgen_test]
fn test_build_teaser_from_js_match() {
    let teaser = build_teaser_js(quick_match(), JsValue::UNDEFINED).unwrap();
    let teaser: Teaser = serde_wasm_bindgen::from_value(teaser).unwrap();

    assert_eq!(teaser.matched_text, "quick");
    assert_eq!(teaser.trailing_word, "");
}

#[wasm_bindgen_test]
fn test_render_result_item_from_js_match() {
    let markup = render_result_item_js(quick_match(), JsValue::UNDEFINED).unwrap();
    assert!(markup.contains(r#"href="/animals/#:~:text=quick""#));
}

#[wasm_bindgen_test]
fn test_teaser_options_from_js() {
    let options = TeaserOptions {
        context_chars: 4,
        emphasis_open: "<mark>".to_string(),
        emphasis_close: "</mark>".to_string(),
    };
    let options = serde_wasm_bindgen::to_value(&options).unwrap();

    let teaser: Teaser =
        serde_wasm_bindgen::from_value(build_teaser_js(quick_match(), options.clone()).unwrap())
            .unwrap();
    assert_eq!(teaser.excerpt_html, "The <mark>quick</mark> bro");

    let markup = render_result_item_js(quick_match(), options).unwrap();
    assert!(markup.contains("<div>The <mark>quick</mark> bro</div>"));
}

#[wasm_bindgen_test]
fn test_unknown_field_is_rejected() {
    let found = Match {
        item: Document::new("Page", "body", "/page/"),
        ref_index: 0,
        score: 0.0,
        matches: vec![FieldMatchRecord::new("tags", "rust", vec![Span::new(0, 3)])],
    };
    let value = serde_wasm_bindgen::to_value(&found).unwrap();

    let err = build_teaser_js(value, JsValue::NULL).unwrap_err();
    assert!(err.as_string().unwrap().contains("Unsupported field key"));
}

#[wasm_bindgen_test]
fn test_search_index_from_json() {
    let index = SearchIndex::from_json(INDEX, JsValue::UNDEFINED).unwrap();
    assert_eq!(index.document_count(), 2);

    let items = index.render_results("document");
    assert_eq!(items.len(), 1);
    assert!(items[0].contains("#:~:text=document,-ation"));

    assert!(index.render_results("zebra").is_empty());
}
