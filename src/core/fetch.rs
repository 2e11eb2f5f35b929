//! Remote layout-document retrieval.
//!
//! Documents arrive as signed URLs; fetching is a plain HTTPS GET
//! with a timeout and a size cap. Timeout and retry policy beyond
//! that belongs to the caller, never the chunking core.

use std::time::Duration;

use crate::core::config::FetchConfig;
use crate::core::error::{PagemillError, Result};
use crate::core::layout::LayoutDocument;

/// HTTP client wrapper for fetching layout documents
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl DocumentFetcher {
    /// Build a fetcher from configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()
            .map_err(PagemillError::FetchFailed)?;

        Ok(Self {
            client,
            max_bytes: config.max_document_bytes,
        })
    }

    /// Fetch and parse a layout document from a URL.
    ///
    /// Non-2xx statuses and transport failures surface as
    /// `FetchFailed`; a body over the size cap as
    /// `DocumentTooLarge`.
    pub async fn fetch(&self, url: &str) -> Result<LayoutDocument> {
        tracing::debug!("Fetching layout document ({} byte cap)", self.max_bytes);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        if bytes.len() > self.max_bytes {
            return Err(PagemillError::DocumentTooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        let document: LayoutDocument = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            "Fetched layout document: {} pages, {} words",
            document.pages.len(),
            document.word_count()
        );

        Ok(document)
    }
}
