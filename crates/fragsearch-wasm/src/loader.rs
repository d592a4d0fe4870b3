//! Index fetching.

use fragsearch_core::{Result, SearchEngine, SearchError, SearchOptions};
use gloo_net::http::Request;

/// Fetch the index at `index_url` and build a search engine over it.
///
/// A non-success status fails with [`SearchError::Fetch`] carrying the status
/// code; a body that is not a document collection fails with
/// [`SearchError::Parse`]. Nothing is retried.
pub async fn fetch_index(index_url: &str, options: SearchOptions) -> Result<SearchEngine> {
    log::info!("Initializing search from {index_url}");

    let response = Request::get(index_url)
        .send()
        .await
        .map_err(|e| SearchError::network(e.to_string()))?;

    if !response.ok() {
        return Err(SearchError::fetch(response.status()));
    }

    let json = response
        .text()
        .await
        .map_err(|e| SearchError::network(format!("Failed to read response: {e}")))?;

    let engine = SearchEngine::from_json(&json, options)?;
    log::debug!("search index ready with {} documents", engine.document_count());
    Ok(engine)
}
