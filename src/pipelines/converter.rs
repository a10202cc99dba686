//! Annotated text to tab-delimited file conversion.
//!
//! # Processing
//! 1. Input lines are folded into records by a [RecordReader].
//! 1. If filtering is enabled, each sentence goes through a [SentenceFilter].
//! 1. Rows are written in input order by a [RowWriter].
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;
use crate::filtering::{AsciiOrEmoji, Filter, SentenceFilter};
use crate::io::{ReaderStats, RecordReader, RowWriter, TrailingRecord};

use super::Pipeline;

/// Conversion parameters, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// annotated text file
    pub txt: PathBuf,
    /// tab-delimited destination file
    pub csv: PathBuf,
    /// keep ASCII/emoji characters only
    pub filter: bool,
    /// verbose diagnostics
    pub debug: bool,
    pub trailing: TrailingRecord,
}

/// Outcome of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub reader: ReaderStats,
}

pub struct Converter<F = AsciiOrEmoji> {
    config: Config,
    filter: Option<SentenceFilter<F>>,
}

impl Converter<AsciiOrEmoji> {
    pub fn new(config: Config) -> Self {
        Self::with_policy(config, AsciiOrEmoji)
    }
}

impl<F> Converter<F>
where
    F: Filter<char>,
{
    /// Use a custom character policy when filtering is enabled.
    pub fn with_policy(config: Config, policy: F) -> Self {
        let filter = if config.filter {
            Some(SentenceFilter::new(policy))
        } else {
            None
        };

        Self { config, filter }
    }

    /// Get a reference to the converter's config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert records from `src` into rows written to `dst`.
    ///
    /// The writer is flushed once every row has been written.
    pub fn convert<R, W>(&self, src: R, dst: &mut RowWriter<W>) -> Result<Summary, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut reader = RecordReader::with_trailing(src, self.config.trailing);
        let mut rows = 0;

        for row in reader.by_ref() {
            let row = row?;
            debug!("[{}] {} ({})", row.identifier(), row.sentence(), row.label());

            let row = match &self.filter {
                Some(filter) => filter.transform_own(row),
                None => row,
            };

            dst.write_single(&row)?;
            rows += 1;
        }
        dst.flush()?;

        Ok(Summary {
            rows,
            reader: *reader.stats(),
        })
    }
}

impl<F> Pipeline<Summary> for Converter<F>
where
    F: Filter<char>,
{
    fn run(&self) -> Result<Summary, Error> {
        let Config { txt, csv, .. } = &self.config;
        if !txt.exists() {
            return Err(Error::MissingInput(txt.clone()));
        }

        let mut dst = RowWriter::from_path(csv)?;
        let src = BufReader::new(File::open(txt)?);

        let summary = self.convert(src, &mut dst)?;

        info!("wrote {} rows to {:?}", summary.rows, csv);
        let stats = &summary.reader;
        if stats.malformed + stats.orphans + stats.discarded + stats.dropped > 0 {
            info!(
                "skipped {} malformed lines, {} orphan tokens, {} unclosed records, {} unterminated records",
                stats.malformed, stats.orphans, stats.discarded, stats.dropped
            );
        }

        Ok(summary)
    }
}
