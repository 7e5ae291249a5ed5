//! Pattern construction and text-window helpers shared by the matcher and
//! the structural checks

/// Characters of context kept on each side of a match
pub const CONTEXT_RADIUS: usize = 30;

/// Marker for text cut off at a window edge
pub const ELLIPSIS: &str = "...";

/// Han, kana and hangul: scripts written without spaces between words
pub fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{30FF}'     // Hiragana, Katakana
            | '\u{3400}'..='\u{4DBF}' // CJK Extension A
            | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
            | '\u{AC00}'..='\u{D7AF}' // Hangul syllables
            | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
            | '\u{20000}'..='\u{2FA1F}'
    )
}

fn needs_boundary(c: char) -> bool {
    (c.is_alphanumeric() || c == '_') && !is_cjk(c)
}

/// Word-boundary requirements of a literal keyword
///
/// A boundary is only required on edges that end in a word character of a
/// space-delimited script: "FDA approved" needs both, "净含量" needs none,
/// "100%" only a leading one. The neighbouring text is judged the same way,
/// so "通过FDA认证" still matches "FDA" while "FDAs" does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEdges {
    leading: bool,
    trailing: bool,
}

impl KeywordEdges {
    pub fn for_keyword(keyword: &str) -> Self {
        Self {
            leading: keyword.chars().next().is_some_and(needs_boundary),
            trailing: keyword.chars().last().is_some_and(needs_boundary),
        }
    }

    /// Whether the byte span `[start, end)` of `text` stands as a whole word
    pub fn admits(&self, text: &str, start: usize, end: usize) -> bool {
        let before_ok = !self.leading
            || !text[..start].chars().next_back().is_some_and(needs_boundary);
        let after_ok =
            !self.trailing || !text[end..].chars().next().is_some_and(needs_boundary);
        before_ok && after_ok
    }
}

/// Byte offset of every character in a text, used to translate regex byte
/// offsets into character offsets and back
pub struct CharMap {
    starts: Vec<usize>,
    byte_len: usize,
}

impl CharMap {
    pub fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(i, _)| i).collect(),
            byte_len: text.len(),
        }
    }

    /// Number of characters in the text
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Character offset of a byte offset that sits on a char boundary
    pub fn char_offset(&self, byte: usize) -> usize {
        match self.starts.binary_search(&byte) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }

    /// Byte offset of a character offset; `len()` maps to the text length
    pub fn byte_offset(&self, char_idx: usize) -> usize {
        self.starts.get(char_idx).copied().unwrap_or(self.byte_len)
    }
}

/// Window of up to `CONTEXT_RADIUS` characters on each side of the span
/// `[start, end)` (character offsets), marked with an ellipsis on every side
/// where the text continues beyond the window.
pub fn extract_context(text: &str, map: &CharMap, start: usize, end: usize) -> String {
    let window_start = start.saturating_sub(CONTEXT_RADIUS);
    let window_end = (end + CONTEXT_RADIUS).min(map.len());

    let slice = &text[map.byte_offset(window_start)..map.byte_offset(window_end)];

    let mut context = String::with_capacity(slice.len() + 2 * ELLIPSIS.len());
    if window_start > 0 {
        context.push_str(ELLIPSIS);
    }
    context.push_str(slice);
    if window_end < map.len() {
        context.push_str(ELLIPSIS);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_keyword_needs_both_edges() {
        let edges = KeywordEdges::for_keyword("cure");
        assert!(edges.admits("a cure.", 2, 6));
        assert!(!edges.admits("manicure", 4, 8));
        assert!(!edges.admits("cures", 0, 4));
    }

    #[test]
    fn test_cjk_neighbours_do_not_block_latin_keyword() {
        let edges = KeywordEdges::for_keyword("FDA");
        let text = "通过FDA认证";
        let start = text.find("FDA").unwrap();
        assert!(edges.admits(text, start, start + 3));
    }

    #[test]
    fn test_cjk_keyword_has_no_boundaries() {
        let edges = KeywordEdges::for_keyword("最佳");
        assert_eq!(
            edges,
            KeywordEdges {
                leading: false,
                trailing: false
            }
        );
        assert!(edges.admits("x最佳y", 1, 7));
    }

    #[test]
    fn test_symbol_edge_needs_no_boundary() {
        let edges = KeywordEdges::for_keyword("100%");
        assert!(edges.admits("100%natural", 0, 4));
        assert!(!edges.admits("a100%", 1, 5));
    }

    #[test]
    fn test_char_map_multibyte() {
        let text = "净含量: 500g";
        let map = CharMap::new(text);
        assert_eq!(map.len(), 9);
        let byte = text.find("500").unwrap();
        assert_eq!(map.char_offset(byte), 5);
        assert_eq!(map.byte_offset(5), byte);
        assert_eq!(map.byte_offset(9), text.len());
    }

    #[test]
    fn test_context_short_text_has_no_ellipsis() {
        let text = "can cure acne";
        let map = CharMap::new(text);
        assert_eq!(extract_context(text, &map, 4, 8), "can cure acne");
    }

    #[test]
    fn test_context_truncated_both_sides() {
        let text = format!("{}cure{}", "a".repeat(40), "b".repeat(40));
        let map = CharMap::new(&text);
        let context = extract_context(&text, &map, 40, 44);
        assert_eq!(
            context,
            format!("...{}cure{}...", "a".repeat(30), "b".repeat(30))
        );
    }

    #[test]
    fn test_context_counts_characters_not_bytes() {
        let text = format!("{}最佳{}", "好".repeat(35), "品".repeat(5));
        let map = CharMap::new(&text);
        let context = extract_context(&text, &map, 35, 37);
        assert_eq!(context, format!("...{}最佳{}", "好".repeat(30), "品".repeat(5)));
    }
}
