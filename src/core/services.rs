//! Unified service container for Pagemill
//!
//! Provides shared access to all core services.

use crate::core::chunker::ChunkingPipeline;
use crate::core::config::Config;
use crate::core::error::{PagemillError, Result};
use crate::core::fetch::DocumentFetcher;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Document fetcher for remote layout documents
    pub fetcher: Arc<DocumentFetcher>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Arc::new(DocumentFetcher::new(&config.fetch)?);

        Ok(Self {
            fetcher,
            config: Arc::new(config),
        })
    }

    /// Create a ChunkingPipeline, honoring a per-request budget.
    ///
    /// Pipelines are created per-request since max_chars may vary.
    pub fn create_pipeline(&self, max_chars: Option<usize>) -> Result<ChunkingPipeline> {
        let max_chars = max_chars.unwrap_or(self.config.chunking.max_chars);
        if max_chars == 0 {
            return Err(PagemillError::InvalidRequest(
                "max_chars must be greater than zero".to_string(),
            ));
        }

        Ok(ChunkingPipeline::new(max_chars))
    }
}
