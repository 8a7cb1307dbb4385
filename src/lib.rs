#![doc = include_str!("../README.md")]
#![deny(clippy::mod_module_files)]

pub mod config;
pub mod errors;
pub mod html;
pub mod parser;
pub mod record;
pub mod sanitize;
pub mod table;
#[cfg(feature = "testing")]
pub mod testing;

use std::io::BufRead;

// Re-export main types
pub use config::{ChartConfig, DerivedSeries};
pub use errors::Error;
pub use html::{ChartBuilder, emit, emit_with};
pub use parser::{
    Extractor, ParseError, ParsedLine, extract, extract_reader, extract_with, is_candidate,
    parse_line,
};
pub use record::{MeasurementRecord, Point};
pub use table::{GroupedTable, VariantSeries};

/// Reads benchmark output from `reader` and renders the whole chart document.
///
/// Nothing is rendered unless the entire input was consumed successfully.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] on the first
/// benchmark result line that cannot be decoded.
pub fn render_document<R: BufRead>(reader: R, config: &ChartConfig) -> Result<String, Error> {
    let table = extract_reader(reader, config)?;
    Ok(emit_with(&table, config))
}
