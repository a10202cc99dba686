//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the [Converter] that turns an annotated text file into a tab-delimited file.
mod converter;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use converter::{Config, Converter, Summary};
pub use pipeline::Pipeline;
