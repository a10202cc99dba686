/*! Row writer.

Rows are written with a tab delimiter and a `\n` terminator.
Fields containing a tab, a double quote or a newline are quoted (and inner quotes doubled).
!*/
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::record::OutputRow;

pub struct RowWriter<W: Write> {
    handle: csv::Writer<W>,
}

impl<W: Write> RowWriter<W> {
    /// Wrap an already opened handle.
    pub fn new(handle: W) -> Self {
        Self {
            handle: Self::builder().from_writer(handle),
        }
    }

    fn builder() -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(b'\t')
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Necessary);
        builder
    }

    /// writes the provided rows, in order.
    pub fn write(&mut self, rows: Vec<OutputRow>) -> Result<(), Error> {
        for row in rows {
            self.write_single(&row)?;
        }
        Ok(())
    }

    pub fn write_single(&mut self, row: &OutputRow) -> Result<(), Error> {
        Ok(self.handle.serialize(row)?)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }

    /// Flush and get the inner handle back.
    pub fn into_inner(self) -> Result<W, Error> {
        self.handle
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl RowWriter<File> {
    /// Create (or truncate) the file at `dst`.
    ///
    /// Missing parent folders are created first.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("creating output folder {:?}", parent);
                std::fs::create_dir_all(parent)?;
            }
        }

        let handle = File::create(dst)?;
        Ok(Self::new(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, sentence: &str, label: &str) -> OutputRow {
        OutputRow::new(id.to_string(), sentence.to_string(), label.to_string())
    }

    fn written(rows: Vec<OutputRow>) -> String {
        let mut wr = RowWriter::new(Vec::new());
        wr.write(rows).unwrap();
        String::from_utf8(wr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn write() {
        let out = written(vec![
            row("1", "Hello, world!", "positive"),
            row("2", "so bad :(", "negative"),
        ]);
        assert_eq!(out, "1\tHello, world!\tpositive\n2\tso bad :(\tnegative\n");
    }

    #[test]
    fn empty_sentence() {
        let out = written(vec![row("3", "", "neutral")]);
        assert_eq!(out, "3\t\tneutral\n");
    }

    #[test]
    fn quoting() {
        let out = written(vec![row("4", "he said \"hi\"", "positive")]);
        assert_eq!(out, "4\t\"he said \"\"hi\"\"\"\tpositive\n");
    }

    #[test]
    fn from_path_creates_folders() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("a").join("b").join("out.csv");
        let mut wr = RowWriter::from_path(&path).unwrap();
        wr.write_single(&row("1", "ok", "positive")).unwrap();
        wr.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1\tok\tpositive\n");
    }
}
