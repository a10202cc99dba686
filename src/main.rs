//! # txt2csv
//!
//! Create a tab-delimited file from an annotated text file.
//!
//! ```sh
//! txt2csv --txt data/train.txt --csv out/train.csv --filter
//! ```
//!
//! Each output row is `(meta id)\t(sentence)\t(sentiment label)`.
//! Use `--debug` (or `RUST_LOG`) to get per-record diagnostics.

use txt2csv::error::Error;
use txt2csv::pipelines::{Config, Converter, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    let opt = cli::Txt2Csv::from_args_or_exit();
    let config = Config::from(opt);

    let level = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("config\n{:#?}", config);

    if let Err(e) = Converter::new(config).run() {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}
