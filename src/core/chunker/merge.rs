//! Global reading-order merge of text and image chunks.

use crate::core::types::SemanticChunk;

/// Merge text and image chunks into one sequence ordered by
/// (page, y_min, x_min) and assign final sequential indices.
///
/// This is the single source of truth for final ordering: whatever
/// provisional indices the accumulator, splitter, or image builder
/// assigned are overwritten here. The sort is stable, so chunks
/// tying on all three keys keep their relative input order.
pub fn merge_reading_order(
    text_chunks: Vec<SemanticChunk>,
    image_chunks: Vec<SemanticChunk>,
) -> Vec<SemanticChunk> {
    let mut all = text_chunks;
    all.extend(image_chunks);

    all.sort_by(|a, b| {
        a.page_number
            .cmp(&b.page_number)
            .then_with(|| a.y_min.total_cmp(&b.y_min))
            .then_with(|| a.x_min.total_cmp(&b.x_min))
    });

    for (index, chunk) in all.iter_mut().enumerate() {
        chunk.chunk_index = index;
    }

    all
}
