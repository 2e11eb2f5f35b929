//! Page-structured layout document model.
//!
//! This is the wire format upstream extractors hand to the service:
//! one entry per page, each carrying positioned words, named images
//! with their placement rectangles, and generic content blocks used
//! by the fallback image strategy. All coordinates are page-space
//! floats with the origin at the page's top-left corner.

use serde::{Deserialize, Serialize};

/// A complete layout document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    /// Total word count across all pages
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(|p| p.words.len()).sum()
    }
}

/// One page of a layout document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPage {
    /// 1-indexed page number
    pub number: u32,

    /// Positioned words on this page
    #[serde(default)]
    pub words: Vec<LayoutWord>,

    /// Named images with their placement rectangles
    #[serde(default)]
    pub images: Vec<LayoutImage>,

    /// Generic content blocks (fallback image source)
    #[serde(default)]
    pub blocks: Vec<LayoutBlock>,
}

/// A positioned word on a page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutWord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A named image and the rectangles where it is placed.
///
/// The same image may be placed several times; the primary
/// extraction strategy emits one item per rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutImage {
    pub name: String,
    #[serde(default)]
    pub rects: Vec<LayoutRect>,
}

/// A placement rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A generic content block with a typed kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutBlock {
    pub kind: BlockKind,

    /// Corner coordinates: [x0, y0, x1, y1]
    pub bbox: [f64; 4],
}

/// Content block kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
}
