//! Grouping of positioned words into visual lines.

use crate::core::chunker::LINE_TOLERANCE;
use crate::core::types::WordItem;

/// An ordered cluster of words sharing a page and a y-band.
///
/// Ephemeral: lines exist only between grouping and accumulation
/// and are never serialized.
#[derive(Debug, Clone)]
pub struct Line {
    words: Vec<WordItem>,
}

impl Line {
    /// Build a line from its words, sorting them by x.
    fn new(mut words: Vec<WordItem>) -> Self {
        words.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { words }
    }

    /// Words in left-to-right order
    pub fn words(&self) -> &[WordItem] {
        &self.words
    }

    /// Consume the line, yielding its words
    pub fn into_words(self) -> Vec<WordItem> {
        self.words
    }

    /// Line text: word texts joined with single spaces
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Top edge: minimum word y
    pub fn top(&self) -> f64 {
        self.words.iter().map(|w| w.y).fold(f64::INFINITY, f64::min)
    }

    /// Bottom edge: maximum word y + height
    pub fn bottom(&self) -> f64 {
        self.words
            .iter()
            .map(|w| w.y + w.height)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Tallest word height on the line
    pub fn max_word_height(&self) -> f64 {
        self.words.iter().map(|w| w.height).fold(0.0, f64::max)
    }
}

/// Cluster one page's words into lines.
///
/// Words are sorted by (y, x); a new line opens whenever a word's y
/// differs from the *first* word of the open line by more than the
/// tolerance. The first word stays the anchor for the whole line --
/// words drifting in y cannot silently stretch a line past it.
pub fn group_into_lines(mut words: Vec<WordItem>) -> Vec<Line> {
    words.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut lines = Vec::new();
    let mut current: Vec<WordItem> = Vec::new();
    let mut anchor_y = 0.0;

    for word in words {
        if current.is_empty() {
            anchor_y = word.y;
            current.push(word);
        } else if (word.y - anchor_y).abs() > LINE_TOLERANCE {
            lines.push(Line::new(std::mem::take(&mut current)));
            anchor_y = word.y;
            current.push(word);
        } else {
            current.push(word);
        }
    }

    if !current.is_empty() {
        lines.push(Line::new(current));
    }

    lines
}
