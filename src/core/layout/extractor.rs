//! Word and image item extraction from layout documents.
//!
//! Words are taken as-is, skipping whitespace-only entries. Image
//! rectangles are resolved through a fixed-priority strategy list
//! per page: placement rectangles first, then a scan of image-typed
//! content blocks. Zero and negative-area rectangles are discarded
//! at ingestion rather than raised as errors.

use crate::core::layout::document::{BlockKind, LayoutDocument, LayoutPage};
use crate::core::types::{ImageItem, WordItem};

/// Top-left distance under which the block-scan strategy treats two
/// rectangles as the same image. Coarser deduplication (by center
/// proximity) happens later in the image chunk builder.
const BLOCK_SCAN_FILTER: f64 = 5.0;

/// Image extraction strategies, in priority order. The first
/// strategy yielding a non-empty result set for a page wins.
const IMAGE_STRATEGIES: &[fn(&LayoutPage) -> Vec<ImageItem>] = &[placement_rects, block_scan];

/// Extract word items from every page of a document.
///
/// Words with whitespace-only text are skipped; surviving items
/// carry their page's 1-indexed number.
pub fn extract_words(document: &LayoutDocument) -> Vec<WordItem> {
    let mut items = Vec::new();

    for page in &document.pages {
        for word in &page.words {
            let text = word.text.trim();
            if text.is_empty() {
                continue;
            }
            items.push(WordItem {
                text: text.to_string(),
                x: word.x,
                y: word.y,
                width: word.width,
                height: word.height,
                page_number: page.number,
            });
        }
    }

    items
}

/// Extract image items from every page of a document.
///
/// Per page, strategies are attempted in priority order and the
/// first non-empty valid result set is accepted. A page without a
/// usable primary mechanism falls through to the block scan; this
/// recovery is local and never surfaces as an error.
pub fn extract_images(document: &LayoutDocument) -> Vec<ImageItem> {
    let mut items = Vec::new();

    for page in &document.pages {
        for strategy in IMAGE_STRATEGIES {
            let found = strategy(page);
            if !found.is_empty() {
                items.extend(found);
                break;
            }
        }
    }

    items
}

/// Primary strategy: one item per placement rectangle of every
/// named image, positive-area rectangles only.
fn placement_rects(page: &LayoutPage) -> Vec<ImageItem> {
    let mut items = Vec::new();

    for image in &page.images {
        for rect in &image.rects {
            if rect.width > 0.0 && rect.height > 0.0 {
                items.push(ImageItem {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    page_number: page.number,
                    name: image.name.clone(),
                });
            }
        }
    }

    items
}

/// Fallback strategy: scan generic content blocks for image-typed
/// entries, applying a coarse top-left duplicate filter.
fn block_scan(page: &LayoutPage) -> Vec<ImageItem> {
    let mut items: Vec<ImageItem> = Vec::new();

    for block in &page.blocks {
        if block.kind != BlockKind::Image {
            continue;
        }

        let [x0, y0, x1, y1] = block.bbox;
        let width = x1 - x0;
        let height = y1 - y0;
        if width <= 0.0 || height <= 0.0 {
            continue;
        }

        let duplicate = items
            .iter()
            .any(|existing| {
                (existing.x - x0).abs() < BLOCK_SCAN_FILTER
                    && (existing.y - y0).abs() < BLOCK_SCAN_FILTER
            });
        if duplicate {
            continue;
        }

        let name = format!("ImageBlock_{}_{}", page.number, items.len());
        items.push(ImageItem {
            x: x0,
            y: y0,
            width,
            height,
            page_number: page.number,
            name,
        });
    }

    items
}
