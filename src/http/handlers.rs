//! HTTP request handlers for the Pagemill API
//!
//! Implements handlers for the 2 REST endpoints: health and chunk.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::core::error::PagemillError;
use crate::core::layout::{extract_images, extract_words, LayoutDocument};
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status and version information.
///
/// # Returns
///
/// JSON response with status "ok" and version number
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Chunk document handler
///
/// Resolves the layout document (inline payload or fetched from a
/// signed URL), extracts word and image items, and runs the
/// chunking pipeline.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `req` - Chunk request with document source and options
///
/// # Returns
///
/// The ordered chunk sequence with statistics, error on failure
///
/// # Errors
///
/// - `InvalidRequest`: Missing document_id or document source,
///   zero max_chars
/// - `FetchFailed`: Document URL could not be fetched
/// - `EmptyDocument`: No words or images extracted
pub async fn chunk_handler(
    State(services): State<Arc<Services>>,
    Json(req): Json<ChunkRequest>,
) -> Result<Json<ChunkResponse>, PagemillError> {
    if req.document_id.trim().is_empty() {
        return Err(PagemillError::InvalidRequest(
            "document_id is required".to_string(),
        ));
    }

    // Inline document wins; otherwise fetch from the signed URL
    let document: LayoutDocument = match (req.document, req.document_url) {
        (Some(document), _) => document,
        (None, Some(url)) => services.fetcher.fetch(&url).await?,
        (None, None) => {
            return Err(PagemillError::InvalidRequest(
                "document or document_url is required".to_string(),
            ));
        }
    };

    let words = extract_words(&document);
    let images = extract_images(&document);

    if words.is_empty() && images.is_empty() {
        return Err(PagemillError::EmptyDocument);
    }

    let pipeline = services.create_pipeline(req.max_chars)?;
    let (chunks, stats) = pipeline.process(words, images);

    Ok(Json(ChunkResponse {
        document_id: req.document_id,
        file_name: req.file_name,
        pages_processed: stats.pages_processed,
        words_extracted: stats.words_extracted,
        images_extracted: stats.images_extracted,
        chunks_created: stats.chunks_created,
        processed_at: chrono::Utc::now().to_rfc3339(),
        chunks,
    }))
}
