//! sentence-level filtering
use super::{AsciiOrEmoji, Filter};
use crate::record::OutputRow;

/// Keeps allowed characters of a sentence and collapses space runs.
///
/// Which characters are allowed is decided by a `Filter<char>` policy, [AsciiOrEmoji] by default.
/// Only U+0020 runs are collapsed, tabs and newlines are left untouched.
/// Sentences are not trimmed again.
#[derive(Debug, Default, Clone)]
pub struct SentenceFilter<F = AsciiOrEmoji> {
    policy: F,
}

impl<F> SentenceFilter<F>
where
    F: Filter<char>,
{
    pub fn new(policy: F) -> Self {
        Self { policy }
    }

    pub fn filter(&self, sentence: &str) -> String {
        let mut filtered = String::with_capacity(sentence.len());
        let mut after_space = false;
        for ch in sentence.chars().filter(|ch| self.policy.detect(*ch)) {
            if ch == ' ' {
                if after_space {
                    continue;
                }
                after_space = true;
            } else {
                after_space = false;
            }
            filtered.push(ch);
        }

        filtered
    }

    /// Takes ownership of [OutputRow] and returns it with a filtered sentence.
    pub fn transform_own(&self, mut row: OutputRow) -> OutputRow {
        let sentence = self.filter(row.sentence());
        row.set_sentence(sentence);
        row
    }
}
