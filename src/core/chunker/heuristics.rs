//! Split-point predicates for the chunk accumulator.
//!
//! Three independent, stateless signals: bullet/ordinal line starts
//! and paragraph-sized vertical gaps are layout signals; a trailing
//! sentence terminator on the accumulated text is a content signal.
//! The accumulator OR-combines them with no priority ordering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::chunker::lines::Line;
use crate::core::chunker::PARAGRAPH_GAP_FACTOR;

/// Bullet glyphs, or a single alphanumeric label followed by ". "
/// or ") " (ordinal lists: "1. ", "a) ").
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[•*-] |[0-9A-Za-z][.)] )").expect("bullet pattern is valid"));

/// Does this line start a list item?
pub fn is_bullet_line(text: &str) -> bool {
    BULLET_RE.is_match(text.trim_start())
}

/// Is there a paragraph-sized gap between the previous line's
/// bottom edge and this line's top edge? False with no previous
/// line.
pub fn is_paragraph_break(prev_line_bottom: Option<f64>, line: &Line) -> bool {
    let Some(prev_bottom) = prev_line_bottom else {
        return false;
    };
    let gap = line.top() - prev_bottom;
    gap > line.max_word_height() * PARAGRAPH_GAP_FACTOR
}

/// Does the text already end a sentence?
pub fn ends_sentence(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}
