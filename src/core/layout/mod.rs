//! Layout provider interface.
//!
//! The chunking core consumes positioned word and image items; this
//! module defines the page-structured layout document upstream
//! extractors produce and turns it into those items.
//!
//! Image placement rectangles come from a fixed-priority strategy
//! list: the primary placement-rectangle lookup, then a coarser scan
//! of image-typed content blocks. The first strategy that yields a
//! valid, non-empty result set per page wins; downstream code never
//! learns which path produced an item.

pub mod document;
pub mod extractor;

pub use document::{
    BlockKind, LayoutBlock, LayoutDocument, LayoutImage, LayoutPage, LayoutRect, LayoutWord,
};
pub use extractor::{extract_images, extract_words};
