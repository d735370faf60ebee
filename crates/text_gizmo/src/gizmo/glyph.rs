//! Glyph lookup and line resolution
//!
//! Every supported character has one baked image; the table maps characters
//! to the icon asset of that image. Resolving text lower-cases it, splits it
//! into lines and drops anything the table does not know.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::config::{TextGizmoConfig, DEFAULT_ICON_EXTENSION, DEFAULT_ICON_PREFIX};

/// Every character that has a baked glyph image
pub const SUPPORTED_CHARACTERS: &str =
    " !#%'()+,-.0123456789;=abcdefghijklmnopqrstuvwxyz_{}~\\?\":/*";

/// Line terminators, longest first so CRLF is consumed as one break
const LINE_TERMINATORS: [&str; 2] = ["\r\n", "\n"];

/// Identifier of a baked glyph image (its icon asset path)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphId(String);

impl GlyphId {
    /// Build the identifier for `ch` from an icon naming scheme
    pub fn for_char(ch: char, prefix: &str, extension: &str) -> Self {
        Self(format!("{prefix}{ch}{extension}"))
    }

    /// Icon asset path
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GlyphId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable character to glyph mapping
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<char, GlyphId>,
}

static SHARED_TABLE: OnceLock<GlyphTable> = OnceLock::new();

impl GlyphTable {
    /// Table using the default icon naming
    pub fn new() -> Self {
        Self::with_naming(DEFAULT_ICON_PREFIX, DEFAULT_ICON_EXTENSION)
    }

    /// Table whose icon paths are `<prefix><char><extension>`
    pub fn with_naming(prefix: &str, extension: &str) -> Self {
        let glyphs: HashMap<char, GlyphId> = SUPPORTED_CHARACTERS
            .chars()
            .map(|ch| (ch, GlyphId::for_char(ch, prefix, extension)))
            .collect();

        log::debug!(
            "Built glyph table with {} glyphs (prefix '{}', extension '{}')",
            glyphs.len(),
            prefix,
            extension
        );

        Self { glyphs }
    }

    /// Table using the icon naming from a configuration
    pub fn from_config(config: &TextGizmoConfig) -> Self {
        Self::with_naming(&config.icon_prefix, &config.icon_extension)
    }

    /// Process-wide default table, built on first use exactly once
    pub fn shared() -> &'static Self {
        SHARED_TABLE.get_or_init(Self::new)
    }

    /// Glyph for a character, if it has one
    pub fn get(&self, ch: char) -> Option<&GlyphId> {
        self.glyphs.get(&ch)
    }

    /// Whether a character has a glyph
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table has no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over (character, glyph) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, &GlyphId)> {
        self.glyphs.iter().map(|(ch, glyph)| (*ch, glyph))
    }

    /// Lower-case `text`, split it into lines and resolve each character.
    ///
    /// Lines break on `"\r\n"` or `"\n"`. Unknown characters are skipped
    /// without leaving a gap. The block always has at least one line.
    pub fn resolve(&self, text: &str) -> TextBlock<'_> {
        let lowered = text.to_lowercase();
        let mut lines = vec![Vec::new()];
        let mut rest = lowered.as_str();

        while let Some(ch) = rest.chars().next() {
            if let Some(terminator) = LINE_TERMINATORS.iter().find(|t| rest.starts_with(**t)) {
                lines.push(Vec::new());
                rest = &rest[terminator.len()..];
                continue;
            }

            if let Some(glyph) = self.get(ch) {
                // lines is never empty
                if let Some(line) = lines.last_mut() {
                    line.push(glyph);
                }
            }
            rest = &rest[ch.len_utf8()..];
        }

        TextBlock { lines }
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved text: lines of glyphs, borrowed from a [`GlyphTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock<'a> {
    lines: Vec<Vec<&'a GlyphId>>,
}

impl<'a> TextBlock<'a> {
    /// Lines in order, top to bottom
    pub fn lines(&self) -> &[Vec<&'a GlyphId>] {
        &self.lines
    }

    /// Number of lines (at least one)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Glyph count of the longest line
    pub fn max_line_len(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total glyphs across all lines
    pub fn glyph_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Whether no line has a glyph
    pub fn is_empty(&self) -> bool {
        self.glyph_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &[&GlyphId]) -> String {
        line.iter()
            .map(|glyph| {
                glyph
                    .as_str()
                    .trim_start_matches(DEFAULT_ICON_PREFIX)
                    .trim_end_matches(DEFAULT_ICON_EXTENSION)
                    .to_string()
            })
            .collect()
    }

    fn block_text(block: &TextBlock<'_>) -> Vec<String> {
        block.lines().iter().map(|line| line_text(line)).collect()
    }

    #[test]
    fn test_table_covers_supported_set() {
        let table = GlyphTable::new();

        assert_eq!(table.len(), SUPPORTED_CHARACTERS.chars().count());
        for ch in SUPPORTED_CHARACTERS.chars() {
            assert!(table.contains(ch), "missing glyph for {ch:?}");
        }
        assert!(!table.contains('A'));
        assert!(!table.contains('@'));
        assert!(!table.contains('\n'));
    }

    #[test]
    fn test_iter_yields_every_glyph_once() {
        let table = GlyphTable::new();

        let mut chars: Vec<char> = table.iter().map(|(ch, _)| ch).collect();
        chars.sort_unstable();
        let mut expected: Vec<char> = SUPPORTED_CHARACTERS.chars().collect();
        expected.sort_unstable();
        assert_eq!(chars, expected);

        for (ch, glyph) in table.iter() {
            assert_eq!(table.get(ch), Some(glyph));
        }
    }

    #[test]
    fn test_icon_naming() {
        let table = GlyphTable::new();
        assert_eq!(
            table.get('a').map(GlyphId::as_str),
            Some("TextGizmo/CharacterImages/text_a.png")
        );

        let custom = GlyphTable::with_naming("icons/", ".tga");
        assert_eq!(custom.get('?').map(GlyphId::as_str), Some("icons/?.tga"));
    }

    #[test]
    fn test_shared_table_is_single_instance() {
        let first = GlyphTable::shared();
        let second = GlyphTable::shared();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), SUPPORTED_CHARACTERS.chars().count());
    }

    #[test]
    fn test_crlf_is_one_break() {
        let table = GlyphTable::new();
        let block = table.resolve("ab\r\ncd");

        assert_eq!(block_text(&block), vec!["ab", "cd"]);
    }

    #[test]
    fn test_trailing_break_leaves_empty_line() {
        let table = GlyphTable::new();
        let block = table.resolve("ab\ncd\r\n");

        assert_eq!(block_text(&block), vec!["ab", "cd", ""]);
        assert_eq!(block.line_count(), 3);
    }

    #[test]
    fn test_lone_carriage_return_is_dropped() {
        let table = GlyphTable::new();
        let block = table.resolve("a\rb");

        assert_eq!(block_text(&block), vec!["ab"]);
    }

    #[test]
    fn test_empty_input_has_one_empty_line() {
        let table = GlyphTable::new();
        let block = table.resolve("");

        assert_eq!(block.line_count(), 1);
        assert!(block.lines()[0].is_empty());
        assert!(block.is_empty());
    }

    #[test]
    fn test_unknown_characters_leave_no_gap() {
        let table = GlyphTable::new();
        let block = table.resolve("a@b$c|");

        assert_eq!(block_text(&block), vec!["abc"]);
    }

    #[test]
    fn test_case_insensitive() {
        let table = GlyphTable::new();
        assert_eq!(table.resolve("HeLLo"), table.resolve("hello"));
    }

    #[test]
    fn test_block_metrics() {
        let table = GlyphTable::new();
        let block = table.resolve("one\nthree\n\nx");

        assert_eq!(block.line_count(), 4);
        assert_eq!(block.max_line_len(), 5);
        assert_eq!(block.glyph_count(), 9);
    }
}
