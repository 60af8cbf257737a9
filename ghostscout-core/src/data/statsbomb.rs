//! StatsBomb open-data catalog provider.
//!
//! Fetches the competitions catalog from the open-data repository's raw
//! JSON endpoint. The endpoint is a static file on GitHub, so there is no
//! rate limiting or authentication to handle; any fault here is fatal to
//! the downloader run.

use super::provider::{CatalogProvider, CompetitionRow, DataError};
use std::time::Duration;

/// Catalog provider over the StatsBomb open-data competitions endpoint.
pub struct StatsBombProvider {
    client: reqwest::blocking::Client,
    source_url: String,
}

impl StatsBombProvider {
    pub fn new(source_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("ghostscout/0.1")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            source_url: source_url.into(),
        }
    }
}

impl CatalogProvider for StatsBombProvider {
    fn name(&self) -> &str {
        "StatsBomb open-data"
    }

    fn fetch_competitions(&self) -> Result<Vec<CompetitionRow>, DataError> {
        let response = self
            .client
            .get(&self.source_url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DataError::ResponseFormatChanged(format!(
                "unexpected status {} from {}",
                response.status(),
                self.source_url
            )));
        }

        let body = response
            .text()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        serde_json::from_str::<Vec<CompetitionRow>>(&body)
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))
    }
}
