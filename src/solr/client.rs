use crate::config::SolrConfig;
use crate::solr::{SearchParams, SolrError};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Thin client for a Solr select handler.
///
/// Holds one `reqwest::Client` so connections are reused across requests.
/// The response document is returned without inspection.
#[derive(Debug, Clone)]
pub struct SolrClient {
    client: reqwest::Client,
    url: String,
}

impl SolrClient {
    pub fn new(config: &SolrConfig) -> Result<Self, SolrError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(SolrError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run a select query and return the raw JSON document.
    ///
    /// # Errors
    ///
    /// - `SolrError::Request` - connection failure or timeout
    /// - `SolrError::Status` - non-2xx response
    /// - `SolrError::Decode` - body is not JSON
    pub async fn select(&self, params: &SearchParams) -> Result<Value, SolrError> {
        debug!(url = %self.url, q = %params.q, "Querying search engine");

        let response = self
            .client
            .get(&self.url)
            .query(params)
            .send()
            .await
            .map_err(SolrError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SolrError::Status { status });
        }

        response.json::<Value>().await.map_err(SolrError::Decode)
    }
}
