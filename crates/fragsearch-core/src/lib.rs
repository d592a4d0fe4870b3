//! fragsearch Core Library
//!
//! Search-as-you-type for static sites: query a pre-built document index,
//! pick the longest matched span of each result, and render a teaser that
//! deep-links to the matched text with a `#:~:text=` fragment.
//!
//! # Example
//!
//! ```
//! use fragsearch_core::{Document, SearchEngine, SearchOptions, TeaserOptions, render_result_item};
//!
//! let docs = vec![Document::new("Animals", "The quick brown fox jumps", "/animals/")];
//! let engine = SearchEngine::new(docs, SearchOptions::default()).unwrap();
//!
//! for found in engine.search("quick") {
//!     let markup = render_result_item(&found, &TeaserOptions::default()).unwrap();
//!     assert!(markup.contains("/animals/#:~:text=quick"));
//! }
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod flight;
pub mod fragment;
pub mod matches;
pub mod render;
pub mod teaser;
pub mod widget;

pub use config::Config;
pub use document::{Document, parse_index};
pub use engine::{SearchEngine, SearchOptions};
pub use error::{Result, SearchError};
pub use flight::{FlightPhase, SingleFlight};
pub use fragment::text_fragment_url;
pub use matches::{FieldKey, FieldMatchRecord, LargestSpan, Match, Span, select_largest_span};
pub use render::render_result_item;
pub use teaser::{Teaser, TeaserOptions, build_teaser};
pub use widget::{ResultsView, SearchWidget};
