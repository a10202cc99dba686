/*!
# IO utilities

Reading of annotated text files and writing of tab-delimited rows.
!*/
pub mod reader;
pub mod writer;

pub use reader::{ReaderStats, RecordReader, TrailingRecord};
pub use writer::RowWriter;
