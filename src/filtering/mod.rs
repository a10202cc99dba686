/*! Filtering utilities

Filters operate on characters or sentences.

- [filter::Filter] is the pure predicate every filter implements. A `Filter<char>` decides whether a character is allowed.
- [emoji::AsciiOrEmoji] is the default character policy: 7-bit ASCII and emoji are kept.
- [sentence::SentenceFilter] rebuilds a sentence with allowed characters only, normalizing spaces.
! */
mod emoji;
mod filter;
mod sentence;

pub use emoji::AsciiOrEmoji;
pub use filter::Filter;
pub use sentence::SentenceFilter;
