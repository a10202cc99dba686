//! # txt2csv
//!
//! Conversion of a meta/token annotated text corpus into a tab-delimited file,
//! with one `identifier\tsentence\tlabel` row per record.
//!
//! The library exposes the record model ([record]), the reading and writing facilities ([io]),
//! character filtering ([filtering]) and the conversion pipeline ([pipelines]).
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod record;
