//! Re-splitting of chunks that exceed the length budget.

use crate::core::chunker::heuristics::ends_sentence;
use crate::core::chunker::SENTENCE_PACK_FLOOR;
use crate::core::types::SemanticChunk;

/// Split any chunk over the budget into sentence-packed parts;
/// chunks at or under budget pass through unchanged. Provisional
/// indices are reassigned sequentially afterwards.
///
/// Parts inherit the parent's full bounding box and page: per-part
/// spatial precision is traded away to keep the splitter purely
/// textual.
pub fn split_oversize(chunks: Vec<SemanticChunk>, max_chars: usize) -> Vec<SemanticChunk> {
    let mut result = Vec::new();

    for chunk in chunks {
        if chunk.content.chars().count() <= max_chars {
            result.push(chunk);
            continue;
        }

        for content in pack_sentences(&chunk.content) {
            let mut part = chunk.clone();
            part.content = content;
            result.push(part);
        }
    }

    for (index, chunk) in result.iter_mut().enumerate() {
        chunk.chunk_index = index;
    }

    result
}

/// Greedy sentence packing: accumulate whitespace-separated tokens
/// (newlines normalized to spaces first) and seal a part once the
/// buffer reaches the floor length AND ends a sentence. The
/// leftover buffer always becomes a final part, so
/// punctuation-free input still terminates with one (possibly
/// oversized) part.
fn pack_sentences(content: &str) -> Vec<String> {
    let normalized = content.replace('\n', " ");
    let mut parts = Vec::new();
    let mut buf = String::new();

    for token in normalized.split_whitespace() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(token);

        if buf.chars().count() >= SENTENCE_PACK_FLOOR && ends_sentence(&buf) {
            parts.push(std::mem::take(&mut buf));
        }
    }

    if !buf.is_empty() {
        parts.push(buf);
    }

    parts
}
