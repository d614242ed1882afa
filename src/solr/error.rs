use thiserror::Error;

/// Failure talking to the downstream search engine
#[derive(Debug, Error)]
pub enum SolrError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to search engine failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("search engine returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("search engine returned malformed JSON: {0}")]
    Decode(#[source] reqwest::Error),
}
