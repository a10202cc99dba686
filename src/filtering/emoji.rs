//! ASCII/Emoji character policy.
use unicode_properties::UnicodeEmoji;

use super::Filter;

/// Keeps 7-bit ASCII characters and characters that have the Unicode `Emoji` property.
///
/// Emoji sequences (flags, ZWJ sequences, keycaps) are not handled as a whole:
/// their emoji components are kept, joiners and variation selectors are not.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiOrEmoji;

impl Filter<char> for AsciiOrEmoji {
    fn detect(&self, ch: char) -> bool {
        ch.is_ascii() || ch.is_emoji_char()
    }
}
