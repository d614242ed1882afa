use crate::solr::{SolrClient, SolrError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub solr: Arc<SolrClient>,
}

/// Query string of `GET /search`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// First `q` wins when the key repeats; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: pairs.into_iter().find(|(key, _)| key == "q").map(|(_, value)| value),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub solr_url: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Upstream(SolrError),
}

impl From<SolrError> for AppError {
    fn from(err: SolrError) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    // Callers only ever see a bare 500; the cause goes to the log.
    fn into_response(self) -> Response {
        match self {
            AppError::Upstream(err) => {
                error!(error = %err, "Search engine call failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
