//! Core data types for the Pagemill chunking service.
//!
//! This module defines the data structures used throughout the
//! application: layout items supplied by the provider, the chunks
//! produced by the pipeline, and request/response payloads.

use serde::{Deserialize, Serialize};

use crate::core::layout::LayoutDocument;

/// A positioned word supplied by the layout provider.
///
/// Coordinates are page-space floats with the origin at the page's
/// top-left corner. Callers are expected to supply already-rounded
/// (2-decimal) values, but correctness does not depend on rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordItem {
    /// Word text (non-empty after trimming)
    pub text: String,

    /// Left edge of the word's box
    pub x: f64,

    /// Top edge of the word's box
    pub y: f64,

    /// Box width
    pub width: f64,

    /// Box height
    pub height: f64,

    /// 1-indexed page number
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
}

/// A positioned image rectangle supplied by the layout provider.
///
/// Several items may describe the same visual image repeated at
/// nearly the same location; the chunk builder deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageItem {
    /// Left edge of the image rectangle
    pub x: f64,

    /// Top edge of the image rectangle
    pub y: f64,

    /// Rectangle width (> 0, enforced at ingestion)
    pub width: f64,

    /// Rectangle height (> 0, enforced at ingestion)
    pub height: f64,

    /// 1-indexed page number
    #[serde(rename = "pageNumber")]
    pub page_number: u32,

    /// Stable identifying label, unique enough for debugging
    pub name: String,
}

impl ImageItem {
    /// Horizontal center of the rectangle
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center of the rectangle
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Running axis-aligned bounding box.
///
/// Starts at ±infinity and shrinks to the union of added boxes.
/// Infinite bounds exist only transiently before the first item is
/// added; emitted chunks always carry finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Empty box that any union will replace.
    pub fn empty() -> Self {
        Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        }
    }

    /// Box covering a single rectangle.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x_min: x,
            x_max: x + width,
            y_min: y,
            y_max: y + height,
        }
    }

    /// Grow to include the given rectangle.
    pub fn expand(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x + width);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y + height);
    }

    /// True once at least one rectangle has been added.
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

/// A chunk in the final reading-order sequence.
///
/// Text chunks are produced by the accumulator (and possibly
/// re-split); image chunks by the image chunk builder. `chunk_index`
/// values assigned before the final merge are provisional; the
/// reading-order merger overwrites them with the global sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticChunk {
    /// Chunk content (non-empty for text chunks)
    pub content: String,

    /// 1-indexed page number
    pub page_number: u32,

    /// Bounding box, flattened for the wire format
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,

    /// Position in the final sequence, starting at 0
    pub chunk_index: usize,

    /// True for image chunks
    pub is_image: bool,
}

impl SemanticChunk {
    /// Create a text chunk with a provisional index.
    pub fn text(content: String, page_number: u32, bounds: BoundingBox, chunk_index: usize) -> Self {
        Self {
            content,
            page_number,
            x_min: bounds.x_min,
            x_max: bounds.x_max,
            y_min: bounds.y_min,
            y_max: bounds.y_max,
            chunk_index,
            is_image: false,
        }
    }

    /// Create an image chunk with a provisional index.
    pub fn image(content: String, page_number: u32, bounds: BoundingBox) -> Self {
        Self {
            content,
            page_number,
            x_min: bounds.x_min,
            x_max: bounds.x_max,
            y_min: bounds.y_min,
            y_max: bounds.y_max,
            chunk_index: 0,
            is_image: true,
        }
    }
}

/// Statistics from a chunking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Pages that had at least one word group processed
    pub pages_processed: usize,

    /// Word items consumed
    pub words_extracted: usize,

    /// Image items consumed (before deduplication)
    pub images_extracted: usize,

    /// Chunks in the final sequence
    pub chunks_created: usize,

    /// Pipeline duration in milliseconds
    pub duration_ms: u64,
}

/// Request to chunk a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRequest {
    /// Caller-supplied document identifier, echoed in the response
    pub document_id: String,

    /// Signed URL of a layout document to fetch
    #[serde(default)]
    pub document_url: Option<String>,

    /// Inline layout document (takes precedence over the URL)
    #[serde(default)]
    pub document: Option<LayoutDocument>,

    /// Original file name, echoed in the response
    #[serde(default)]
    pub file_name: Option<String>,

    /// Per-request override of the chunk length budget
    #[serde(default)]
    pub max_chars: Option<usize>,
}

/// Response from a chunking operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkResponse {
    /// Document identifier from the request
    pub document_id: String,

    /// File name from the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Pages that yielded at least one processed word group
    pub pages_processed: usize,

    /// Word items extracted from the layout document
    pub words_extracted: usize,

    /// Image items extracted from the layout document
    pub images_extracted: usize,

    /// Chunks in the final sequence
    pub chunks_created: usize,

    /// Completion timestamp (ISO 8601)
    pub processed_at: String,

    /// The ordered chunk sequence
    pub chunks: Vec<SemanticChunk>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
