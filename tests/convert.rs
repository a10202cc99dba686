use std::path::Path;
use std::process::Command;

use txt2csv::error::Error;
use txt2csv::io::TrailingRecord;
use txt2csv::pipelines::{Config, Converter, Pipeline};

const CORPUS: &str = "meta 100 positive
I Eng
love Eng
it Eng
! O
😍 O

meta 101 negative
Nunca Spa
más Spa
, O
terrible Eng

meta 102 neutral

meta 103 positive
\" O
ok Eng
\" O
";

fn config(src: &Path, dst: &Path) -> Config {
    Config {
        txt: src.to_path_buf(),
        csv: dst.to_path_buf(),
        filter: false,
        debug: false,
        trailing: TrailingRecord::Drop,
    }
}

fn write_corpus(dir: &Path) -> std::path::PathBuf {
    let src = dir.join("corpus.txt");
    std::fs::write(&src, CORPUS).unwrap();
    src
}

#[test_log::test]
fn convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path());
    let dst = dir.path().join("csv").join("nested").join("out.csv");

    let summary = Converter::new(config(&src, &dst)).run().unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.reader.dropped, 1);

    let content = std::fs::read_to_string(&dst).unwrap();
    assert_eq!(
        content,
        "100\tI love it!😍\tpositive
101\tNunca más, terrible\tnegative
102\t\tneutral
"
    );
}

#[test_log::test]
fn convert_file_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path());
    let dst = dir.path().join("out.csv");

    let config = Config {
        filter: true,
        ..config(&src, &dst)
    };
    Converter::new(config).run().unwrap();

    let content = std::fs::read_to_string(&dst).unwrap();
    assert_eq!(
        content,
        "100\tI love it!😍\tpositive
101\tNunca ms, terrible\tnegative
102\t\tneutral
"
    );
}

#[test_log::test]
fn convert_file_flush_trailing() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path());
    let dst = dir.path().join("out.csv");

    let config = Config {
        trailing: TrailingRecord::Flush,
        ..config(&src, &dst)
    };
    let summary = Converter::new(config).run().unwrap();
    assert_eq!(summary.rows, 4);

    let content = std::fs::read_to_string(&dst).unwrap();
    let last = content.lines().last().unwrap();
    assert_eq!(last, "103\t\"\"\" ok\"\"\"\tpositive");
}

#[test]
fn overwrite_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path());
    let dst = dir.path().join("out.csv");
    std::fs::write(&dst, "stale content\nthat is long enough to notice\n").unwrap();

    Converter::new(config(&src, &dst)).run().unwrap();
    let content = std::fs::read_to_string(&dst).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.starts_with("100\t"));
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("missing.txt");
    let dst = dir.path().join("out.csv");

    let res = Converter::new(config(&src, &dst)).run();
    assert!(matches!(res, Err(Error::MissingInput(p)) if p == src));
    assert!(!dst.exists());
}

#[test]
fn binary_exit_codes() {
    let bin = env!("CARGO_BIN_EXE_txt2csv");

    let missing_args = Command::new(bin).arg("--txt").arg("a.txt").output().unwrap();
    assert_eq!(missing_args.status.code(), Some(2));

    let dir = tempfile::tempdir().unwrap();
    let missing_input = Command::new(bin)
        .arg("--txt")
        .arg(dir.path().join("missing.txt"))
        .arg("--csv")
        .arg(dir.path().join("out.csv"))
        .output()
        .unwrap();
    assert!(!missing_input.status.success());

    let src = write_corpus(dir.path());
    let dst = dir.path().join("ok").join("out.csv");
    let ok = Command::new(bin)
        .arg("--txt")
        .arg(&src)
        .arg("--csv")
        .arg(&dst)
        .arg("--filter")
        .output()
        .unwrap();
    assert!(ok.status.success());
    assert_eq!(std::fs::read_to_string(&dst).unwrap().lines().count(), 3);
}
