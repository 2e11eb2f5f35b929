//! One descriptive chunk per distinct image.

use std::collections::BTreeMap;

use crate::core::chunker::IMAGE_DEDUP_RADIUS;
use crate::core::types::{BoundingBox, ImageItem, SemanticChunk};

/// Build image chunks: per page, sort by (y, x), collapse
/// near-coincident rectangles by center proximity (first occurrence
/// in sort order wins), and emit one chunk per survivor.
///
/// Layout providers routinely report the same visual image several
/// times at almost the same location; center distance under the
/// dedup radius on both axes marks a duplicate.
pub fn build_image_chunks(images: &[ImageItem]) -> Vec<SemanticChunk> {
    let mut by_page: BTreeMap<u32, Vec<&ImageItem>> = BTreeMap::new();
    for image in images {
        by_page.entry(image.page_number).or_default().push(image);
    }

    let mut chunks = Vec::new();

    for (_, mut page_images) in by_page {
        page_images.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

        let mut kept: Vec<&ImageItem> = Vec::new();
        for image in page_images {
            let duplicate = kept.iter().any(|existing| {
                (existing.center_x() - image.center_x()).abs() < IMAGE_DEDUP_RADIUS
                    && (existing.center_y() - image.center_y()).abs() < IMAGE_DEDUP_RADIUS
            });
            if !duplicate {
                kept.push(image);
            }
        }

        for image in kept {
            let content = format!(
                "[Image: {} at position ({}, {}) with dimensions {}x{}]",
                image.name,
                image.x as i64,
                image.y as i64,
                image.width as i64,
                image.height as i64
            );
            chunks.push(SemanticChunk::image(
                content,
                image.page_number,
                BoundingBox::from_rect(image.x, image.y, image.width, image.height),
            ));
        }
    }

    chunks
}
