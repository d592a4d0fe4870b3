//! Error types for the fragsearch core library.

use thiserror::Error;

/// Result type alias using `SearchError`.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while loading the index, querying it or building teasers.
///
/// Every variant owns plain data so the error is `Clone`: a pending index load
/// is shared between all keystrokes waiting on it, and each of them receives
/// the same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The index request completed with a non-success HTTP status.
    #[error("Response status: {status}")]
    Fetch { status: u16 },

    /// The index request could not be sent or its body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The index body is not a valid document collection.
    #[error("Failed to parse index: {0}")]
    Parse(String),

    /// A match carries no field spans, so no teaser can be built.
    #[error("Match for {url} has no matched span")]
    NoMatchedSpan { url: String },

    /// A field match record names a key the teaser logic does not know.
    #[error("Unsupported field key: {0}")]
    UnsupportedField(String),

    /// A span points past the end of its field value.
    #[error("Span [{start}, {stop}] is out of range for a field of {len} chars")]
    SpanOutOfRange { start: usize, stop: usize, len: usize },

    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The results view rejected an update.
    #[error("View error: {0}")]
    View(String),
}

impl SearchError {
    /// Create a fetch error from an HTTP status code.
    pub fn fetch(status: u16) -> Self {
        Self::Fetch { status }
    }

    /// Create a new network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new view error.
    pub fn view(message: impl Into<String>) -> Self {
        Self::View(message.into())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
