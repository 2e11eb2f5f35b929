//! Chunking pipeline orchestration.
//!
//! Coordinates the end-to-end chunking workflow:
//! 1. Group words by page
//! 2. Cluster each page's words into lines
//! 3. Accumulate lines into bounded chunks
//! 4. Re-split anything still over budget
//! 5. Build image chunks
//! 6. Merge everything into global reading order

use std::collections::BTreeMap;
use std::time::Instant;

use crate::core::chunker::accumulator::ChunkAccumulator;
use crate::core::chunker::images::build_image_chunks;
use crate::core::chunker::lines::group_into_lines;
use crate::core::chunker::merge::merge_reading_order;
use crate::core::chunker::splitter::split_oversize;
use crate::core::types::{ChunkStats, ImageItem, SemanticChunk, WordItem};

/// Orchestrates the chunking pipeline.
///
/// A pipeline is a pure function of its inputs: pages carry no
/// state into one another, and the final order is recomputed
/// globally by the merge step, so per-page work could run in any
/// order without changing the output.
#[derive(Debug, Clone)]
pub struct ChunkingPipeline {
    /// Chunk length budget in characters
    max_chars: usize,
}

impl ChunkingPipeline {
    /// Create a pipeline with the given length budget.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Get the chunk length budget.
    #[allow(dead_code)]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Chunk a document's items and return the final sequence plus
    /// statistics.
    pub fn process(
        &self,
        words: Vec<WordItem>,
        images: Vec<ImageItem>,
    ) -> (Vec<SemanticChunk>, ChunkStats) {
        let start = Instant::now();
        let words_extracted = words.len();
        let images_extracted = images.len();

        let mut by_page: BTreeMap<u32, Vec<WordItem>> = BTreeMap::new();
        for word in words {
            by_page.entry(word.page_number).or_default().push(word);
        }

        let mut text_chunks = Vec::new();
        let mut pages_processed = 0;

        for (page_number, page_words) in by_page {
            let page_chunks = self.chunk_page(page_words, page_number);
            tracing::debug!("Page {}: {} text chunks", page_number, page_chunks.len());
            text_chunks.extend(page_chunks);
            pages_processed += 1;
        }

        let image_chunks = build_image_chunks(&images);
        let chunks = merge_reading_order(text_chunks, image_chunks);

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Chunking complete: {} words, {} images -> {} chunks \
             across {} pages in {}ms",
            words_extracted,
            images_extracted,
            chunks.len(),
            pages_processed,
            duration_ms
        );

        let stats = ChunkStats {
            pages_processed,
            words_extracted,
            images_extracted,
            chunks_created: chunks.len(),
            duration_ms,
        };

        (chunks, stats)
    }

    /// Chunk one page: line grouping, accumulation, oversize split.
    fn chunk_page(&self, words: Vec<WordItem>, page_number: u32) -> Vec<SemanticChunk> {
        let lines = group_into_lines(words);

        let mut accumulator = ChunkAccumulator::new(page_number, self.max_chars);
        for line in lines {
            accumulator.push_line(line);
        }

        split_oversize(accumulator.finish(), self.max_chars)
    }
}
