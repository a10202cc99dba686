/*! Record reading

[RecordReader] implements [Iterator] over rows, folding input lines into records:

- `meta <id> <label>` opens a record (an already open one is discarded),
- `<word> <tag>` adds a token to the open record,
- a blank line closes the open record and yields its row,
- other lines are reported and skipped.

The reader is lazy and single pass.
!*/
use std::io::{BufRead, Lines};

use log::{debug, warn};

use crate::error::Error;
use crate::record::{Line, OutputRow, Record, Token};

/// What to do with a record that is still open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRecord {
    /// Drop it, only a blank line closes a record.
    #[default]
    Drop,
    /// Yield it as if the input ended with a blank line.
    Flush,
}

/// Line/record counts gathered while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderStats {
    /// lines read
    pub lines: usize,
    /// rows yielded
    pub rows: usize,
    /// lines that are neither header, token nor blank
    pub malformed: usize,
    /// token lines read while no record was open
    pub orphans: usize,
    /// records replaced by a new header before being closed
    pub discarded: usize,
    /// unterminated record dropped at end of input
    pub dropped: usize,
}

/// Reader that yields rows from blank line separated records.
#[derive(Debug)]
pub struct RecordReader<R> {
    lines: Lines<R>,
    current: Option<Record>,
    trailing: TrailingRecord,
    stats: ReaderStats,
    done: bool,
}

impl<R> RecordReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self::with_trailing(reader, TrailingRecord::default())
    }

    pub fn with_trailing(reader: R, trailing: TrailingRecord) -> Self {
        Self {
            lines: reader.lines(),
            current: None,
            trailing,
            stats: ReaderStats::default(),
            done: false,
        }
    }

    /// Get a reference to the reader's stats.
    pub fn stats(&self) -> &ReaderStats {
        &self.stats
    }

    /// Update state with a single line.
    /// Returns a row if the line closed a record.
    fn feed(&mut self, line: &str) -> Option<OutputRow> {
        let line_number = self.stats.lines;
        match Line::classify(line) {
            Line::Header { identifier, label } => {
                if let Some(previous) = self.current.take() {
                    debug!(
                        "line {}: record {} is not closed, discarding it",
                        line_number,
                        previous.identifier()
                    );
                    self.stats.discarded += 1;
                }
                self.current = Some(Record::new(identifier.to_string(), label.to_string()));
                None
            }
            Line::Token { word, tag } => {
                match self.current.as_mut() {
                    Some(record) => record.push(Token::new(word.to_string(), tag.to_string())),
                    None => {
                        debug!("line {}: token {:?} outside of a record", line_number, word);
                        self.stats.orphans += 1;
                    }
                }
                None
            }
            Line::Blank => self.current.take().map(|record| self.close(record)),
            Line::Malformed { fields } => {
                debug!(
                    "line {}: unexpected number of fields ({}): {:?}",
                    line_number, fields, line
                );
                self.stats.malformed += 1;
                None
            }
        }
    }

    fn close(&mut self, record: Record) -> OutputRow {
        self.stats.rows += 1;
        record.into_row()
    }

    /// Handle the eventual open record at end of input.
    fn finish(&mut self) -> Option<OutputRow> {
        let record = self.current.take()?;
        match self.trailing {
            TrailingRecord::Flush => Some(self.close(record)),
            TrailingRecord::Drop => {
                warn!(
                    "record {} is not terminated by a blank line, dropping it",
                    record.identifier()
                );
                self.stats.dropped += 1;
                None
            }
        }
    }
}

impl<R> Iterator for RecordReader<R>
where
    R: BufRead,
{
    type Item = Result<OutputRow, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(line) = self.lines.next() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::Io(e)));
                }
            };
            self.stats.lines += 1;
            if let Some(row) = self.feed(&line) {
                return Some(Ok(row));
            }
        }

        // close eventual last record
        self.done = true;
        self.finish().map(Ok)
    }
}
