//! Text blocks - the unit of work submitted to the generation service

use std::fmt;

/// An ordered, zero-indexed chunk of cleaned source text
///
/// Blocks are produced by the segmenter and never split a word. Their text is
/// the block's words joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextBlock {
    index: usize,
    text: String,
}

impl TextBlock {
    /// Create a block at the given position
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Zero-based position of the block in the document
    pub fn index(&self) -> usize {
        self.index
    }

    /// Block contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Iterate over the block's words
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
