/*! Records and their lines.

An annotated corpus is a sequence of records separated by blank lines:

```text
meta 1234 positive
Hello X
, X
world X
! X

meta 1235 negative
...
```

Each input line is classified as a [Line], token lines are accumulated into the
currently open [Record], which is turned into an [OutputRow] when a blank line closes it.
!*/
use serde::Serialize;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// First field of a header line.
const HEADER_MARKER: &str = "meta";

/// Kind of an input line, decided by its number of whitespace-separated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `meta <identifier> <label>`
    Header { identifier: &'a str, label: &'a str },
    /// `<word> <tag>`
    Token { word: &'a str, tag: &'a str },
    /// empty or whitespace-only line
    Blank,
    /// anything else
    Malformed { fields: usize },
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => Line::Blank,
            [marker, identifier, label] if *marker == HEADER_MARKER => Line::Header {
                identifier: *identifier,
                label: *label,
            },
            [word, tag] => Line::Token {
                word: *word,
                tag: *tag,
            },
            other => Line::Malformed {
                fields: other.len(),
            },
        }
    }
}

/// A (word, tag) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    word: String,
    tag: String,
}

impl Token {
    pub fn new(word: String, tag: String) -> Self {
        Self { word, tag }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Words starting with a letter (general category L*) are space-separated from the preceding token,
    /// other ones (punctuation, quotes, numbers, symbols...) are glued to it.
    fn is_spaced(&self) -> bool {
        self.word.chars().next().map_or(false, |first| {
            first.general_category_group() == GeneralCategoryGroup::Letter
        })
    }
}

/// An open record, accumulating tokens until a blank line is encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    identifier: String,
    label: String,
    tokens: Vec<Token>,
}

impl Record {
    pub fn new(identifier: String, label: String) -> Self {
        Self {
            identifier,
            label,
            tokens: Vec::new(),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Rebuild the sentence from tokens.
    ///
    /// Leading/trailing whitespace is stripped from the result.
    pub fn sentence(&self) -> String {
        let mut sentence = String::new();
        for token in &self.tokens {
            if token.is_spaced() {
                sentence.push(' ');
            }
            sentence.push_str(token.word());
        }

        sentence.trim().to_string()
    }

    /// Close the record.
    pub fn into_row(self) -> OutputRow {
        let sentence = self.sentence();
        OutputRow {
            identifier: self.identifier,
            sentence,
            label: self.label,
        }
    }
}

/// A finished record, serialized as `identifier\tsentence\tlabel`.
///
/// Field order matters: it is the column order of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    identifier: String,
    sentence: String,
    label: String,
}

impl OutputRow {
    pub fn new(identifier: String, sentence: String, label: String) -> Self {
        Self {
            identifier,
            sentence,
            label,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the sentence, keeping identifier and label.
    pub fn set_sentence(&mut self, sentence: String) {
        self.sentence = sentence;
    }
}
