//! Text segmentation into bounded, word-aligned blocks

use ecotab_domain::TextBlock;

/// Splits cleaned text into ordered blocks of at most `max_chars` characters
///
/// Words are packed greedily and joined by single spaces. Blocks only break
/// at whitespace, so hyphenated compounds stay whole. A word longer than the
/// limit becomes a block of its own rather than being cut.
#[derive(Debug, Clone, Copy)]
pub struct TextSegmenter {
    max_chars: usize,
}

impl TextSegmenter {
    /// Create a new segmenter
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Configured block width
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Segment the given text
    pub fn segment(&self, text: &str) -> Vec<TextBlock> {
        let mut blocks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            if current_len == 0 {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= self.max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                blocks.push(TextBlock::new(blocks.len(), std::mem::take(&mut current)));
                current.push_str(word);
                current_len = word_len;
            }
        }

        if current_len > 0 {
            blocks.push(TextBlock::new(blocks.len(), current));
        }

        blocks
    }
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new(1500)
    }
}

/// Collapse every whitespace run (newlines included) to a single space and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(blocks: &[TextBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.text()).collect()
    }

    #[test]
    fn test_short_text_is_one_block() {
        let blocks = TextSegmenter::new(100).segment("Short text here.");
        assert_eq!(texts(&blocks), vec!["Short text here."]);
        assert_eq!(blocks[0].index(), 0);
    }

    #[test]
    fn test_empty_text_has_no_blocks() {
        assert!(TextSegmenter::new(100).segment("").is_empty());
        assert!(TextSegmenter::new(100).segment("   \n ").is_empty());
    }

    #[test]
    fn test_breaks_at_word_boundaries() {
        let blocks = TextSegmenter::new(10).segment("aaa bbb ccc ddd");
        assert_eq!(texts(&blocks), vec!["aaa bbb", "ccc ddd"]);
        assert_eq!(blocks[1].index(), 1);
    }

    #[test]
    fn test_exact_fit() {
        let blocks = TextSegmenter::new(7).segment("aaa bbb ccc");
        assert_eq!(texts(&blocks), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_hyphenated_compound_not_split() {
        let blocks = TextSegmenter::new(12).segment("le sous-secteur agro-industriel");
        assert_eq!(texts(&blocks), vec!["le", "sous-secteur", "agro-industriel"]);
    }

    #[test]
    fn test_oversized_word_gets_own_block() {
        let long = "x".repeat(25);
        let text = format!("avant {} apres", long);
        let blocks = TextSegmenter::new(10).segment(&text);
        assert_eq!(texts(&blocks), vec!["avant", long.as_str(), "apres"]);
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        // 5 chars, 7 bytes each
        let blocks = TextSegmenter::new(11).segment("éééée ààààà");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_deterministic() {
        let text = "Le PIB national aurait progressé de 4,2% au premier trimestre 2025. ".repeat(40);
        let segmenter = TextSegmenter::new(150);
        assert_eq!(segmenter.segment(&text), segmenter.segment(&text));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  PIB\n\n\nnational \t en   hausse \n"),
            "PIB national en hausse"
        );
    }

    proptest! {
        #[test]
        fn prop_blocks_preserve_words_and_width(
            words in proptest::collection::vec("[a-zé0-9%,-]{1,30}", 0..80),
            width in 1usize..60,
        ) {
            let text = words.join(" ");
            let blocks = TextSegmenter::new(width).segment(&text);

            let rebuilt: Vec<&str> = blocks.iter().flat_map(|b| b.words()).collect();
            let expected: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rebuilt, expected);

            for (i, block) in blocks.iter().enumerate() {
                prop_assert_eq!(block.index(), i);
                prop_assert!(!block.text().is_empty());
                let single_word = block.words().count() == 1;
                prop_assert!(block.char_len() <= width || single_word);
            }
        }
    }
}
