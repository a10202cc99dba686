/*!
# Tab-delimited writing

[RowWriter] writes [crate::record::OutputRow]s as `identifier\tsentence\tlabel` lines, without header.
!*/
mod rowwriter;

pub use rowwriter::RowWriter;
