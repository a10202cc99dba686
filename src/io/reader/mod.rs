/*! Corpus reading utilities

[RecordReader] iterates over the records of an annotated text file, yielding one [crate::record::OutputRow] per closed record.
!*/
mod textreader;

pub use textreader::{ReaderStats, RecordReader, TrailingRecord};
