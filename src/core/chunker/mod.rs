//! Document chunking module.
//!
//! Turns positioned word and image items into an ordered sequence
//! of semantic chunks:
//!
//! - Words are clustered into visual lines by y tolerance
//! - Lines are accumulated into bounded text chunks using layout
//!   and textual split heuristics
//! - Oversized chunks are re-split on sentence boundaries
//! - Near-coincident image rectangles collapse to one chunk each
//! - Text and image chunks merge into one global reading order
//!
//! The pipeline is a pure, deterministic function of its inputs:
//! no shared state across documents, nothing retried, final order
//! always recomputed globally from bounding-box coordinates.

pub mod accumulator;
pub mod heuristics;
pub mod images;
pub mod lines;
pub mod merge;
pub mod pipeline;
pub mod splitter;

pub use accumulator::ChunkAccumulator;
pub use lines::{group_into_lines, Line};
pub use pipeline::ChunkingPipeline;

/// Words whose y differs from the line anchor by more than this sit
/// on a different visual line.
pub const LINE_TOLERANCE: f64 = 5.0;

/// A vertical gap larger than this multiple of the line's tallest
/// word reads as a paragraph break.
pub const PARAGRAPH_GAP_FACTOR: f64 = 2.0;

/// Images whose centers differ by less than this on both axes are
/// duplicates of one another.
pub const IMAGE_DEDUP_RADIUS: f64 = 15.0;

/// Minimum part length before the oversize splitter will seal a
/// part at a sentence boundary.
pub const SENTENCE_PACK_FLOOR: usize = 120;
