//! Per-page accumulation of lines into bounded text chunks.

use crate::core::chunker::heuristics::{ends_sentence, is_bullet_line, is_paragraph_break};
use crate::core::chunker::lines::Line;
use crate::core::types::{BoundingBox, SemanticChunk, WordItem};

/// State machine over one page's lines.
///
/// Owns the pending word items and the running bounding box;
/// flushing emits a chunk and resets both. Each page gets its own
/// accumulator, discarded after producing its chunks.
///
/// A chunk is flushed before a line is added when the accumulator
/// is non-empty and any of four signals fires: the line starts a
/// list item, a paragraph-sized gap precedes it, the combined text
/// would exceed the length budget, or the accumulated text already
/// ends a sentence. The signals are OR-combined with no priority
/// ordering; over-splitting is preferred to unbounded growth.
#[derive(Debug)]
pub struct ChunkAccumulator {
    page_number: u32,
    max_chars: usize,
    items: Vec<WordItem>,
    bounds: BoundingBox,
    prev_line_bottom: Option<f64>,
    chunks: Vec<SemanticChunk>,
}

impl ChunkAccumulator {
    /// Create an empty accumulator for one page.
    pub fn new(page_number: u32, max_chars: usize) -> Self {
        Self {
            page_number,
            max_chars,
            items: Vec::new(),
            bounds: BoundingBox::empty(),
            prev_line_bottom: None,
            chunks: Vec::new(),
        }
    }

    /// Feed the next line in reading order.
    pub fn push_line(&mut self, line: Line) {
        let line_text = line.text();
        let current_text = self.accumulated_text();
        let candidate = if current_text.is_empty() {
            line_text.clone()
        } else {
            format!("{current_text} {line_text}")
        };

        let bullet = is_bullet_line(&line_text);
        let paragraph_break = is_paragraph_break(self.prev_line_bottom, &line);
        let exceeds = candidate.chars().count() > self.max_chars;
        // Evaluated on the text accumulated *before* this line
        let sentence_done = !current_text.is_empty() && ends_sentence(&current_text);

        if !self.items.is_empty() && (bullet || paragraph_break || exceeds || sentence_done) {
            self.flush();
        }

        self.prev_line_bottom = Some(line.bottom());
        for word in line.into_words() {
            self.bounds.expand(word.x, word.y, word.width, word.height);
            self.items.push(word);
        }
    }

    /// Flush any remaining accumulation and return the page's
    /// chunks with provisional indices.
    pub fn finish(mut self) -> Vec<SemanticChunk> {
        if !self.items.is_empty() {
            self.flush();
        }
        self.chunks
    }

    fn accumulated_text(&self) -> String {
        self.items
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// Emit the pending items as a chunk and reset. Whitespace-only
    /// accumulations are discarded silently, not emitted.
    fn flush(&mut self) {
        let content = self.accumulated_text();
        if !content.is_empty() {
            let index = self.chunks.len();
            self.chunks
                .push(SemanticChunk::text(content, self.page_number, self.bounds, index));
        }
        self.items.clear();
        self.bounds = BoundingBox::empty();
    }
}
