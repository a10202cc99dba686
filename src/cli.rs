//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::clap::ErrorKind;
use structopt::StructOpt;
use txt2csv::io::TrailingRecord;
use txt2csv::pipelines::Config;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "txt2csv",
    about = "Create a tab-delimited (id, sentence, label) file from an annotated text file."
)]
/// Conversion parameters.
///
/// ```sh
/// USAGE:
///     txt2csv [FLAGS] --csv <csv> --txt <txt>
///
/// FLAGS:
///         --debug             verbose diagnostics
///         --filter            filter non-English/Emoji characters
///         --flush-trailing    keep a last record that is not followed by a blank line
///     -h, --help              Prints help information
///     -V, --version           Prints version information
///
/// OPTIONS:
///         --csv <csv>    output csv file path
///         --txt <txt>    input txt file path
/// ```
pub struct Txt2Csv {
    #[structopt(long = "txt", parse(from_os_str), help = "input txt file path")]
    pub txt: PathBuf,
    #[structopt(long = "csv", parse(from_os_str), help = "output csv file path")]
    pub csv: PathBuf,
    #[structopt(long = "filter", help = "filter non-English/Emoji characters")]
    pub filter: bool,
    #[structopt(long = "debug", help = "verbose diagnostics")]
    pub debug: bool,
    #[structopt(
        long = "flush-trailing",
        help = "keep a last record that is not followed by a blank line"
    )]
    pub flush_trailing: bool,
}

impl Txt2Csv {
    /// Parse arguments, exiting with status 2 on invalid/missing ones.
    pub fn from_args_or_exit() -> Self {
        match Self::from_iter_safe(std::env::args_os()) {
            Ok(opt) => opt,
            Err(e) => match e.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
                _ => {
                    eprintln!("{}", e.message);
                    std::process::exit(2);
                }
            },
        }
    }
}

impl From<Txt2Csv> for Config {
    fn from(opt: Txt2Csv) -> Config {
        let trailing = if opt.flush_trailing {
            TrailingRecord::Flush
        } else {
            TrailingRecord::Drop
        };

        Config {
            txt: opt.txt,
            csv: opt.csv,
            filter: opt.filter,
            debug: opt.debug,
            trailing,
        }
    }
}
