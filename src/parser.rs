//! Extraction of measurement records from raw benchmark output.
//!
//! The input is whatever `go test -bench` printed, possibly interleaved with
//! build logs and headers. Only result lines are considered:
//!
//! ```text
//! <group>/<variant>-<n>\t<runs>\t<time_ns> ns/op\t<bytes> B/op\tload=<load>\t…\t…\t…
//! ```
//!
//! A line is a candidate when it splits into exactly
//! [`field_count`](ChartConfig::field_count) tab-separated fields and its
//! first field starts with [`line_prefix`](ChartConfig::line_prefix).
//! Everything else is skipped silently. Once a line is a candidate, any
//! failure to decode its numbers is fatal: extraction stops and the error is
//! returned together with the line number.

use std::io::BufRead;
use std::num::ParseIntError;

use crate::config::{ChartConfig, DerivedSeries};
use crate::errors::Error;
use crate::record::MeasurementRecord;
use crate::table::GroupedTable;

/// Field holding the time per operation in nanoseconds.
const TIME_FIELD: usize = 2;
/// Field holding the load factor.
const LOAD_FIELD: usize = 4;
const NANOS_PER_MILLI: f64 = 1_000_000.0;
/// Label put in front of the load factor; not repeated if the harness
/// already printed it.
const LOAD_LABEL: &str = "load=";

/// Errors decoding a candidate result line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The benchmark name has no `/<variant>-<n>` part.
    #[error("missing variant segment in `{0}`")]
    MissingVariant(String),

    /// The variant segment has no `-<n>` part.
    #[error("missing entry count in `{0}`")]
    MissingEntryCount(String),

    /// The entry count is not a non-negative integer.
    #[error("invalid entry count `{value}`: {source}")]
    InvalidEntryCount {
        /// The text that failed to parse.
        value: String,
        /// The underlying integer error.
        source: ParseIntError,
    },

    /// A numeric field is blank.
    #[error("field {field} has no value")]
    MissingNumber {
        /// 0-based field index.
        field: usize,
    },

    /// A numeric field does not start with a non-negative integer.
    #[error("invalid integer `{value}` in field {field}: {source}")]
    InvalidNumber {
        /// 0-based field index.
        field: usize,
        /// The token that failed to parse.
        value: String,
        /// The underlying integer error.
        source: ParseIntError,
    },
}

/// Records decoded from one result line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// The timing record of the line itself.
    pub record: MeasurementRecord,
    /// Records synthesized by matching [`DerivedSeries`] rules.
    pub derived: Vec<MeasurementRecord>,
}

impl ParsedLine {
    /// All records of the line, primary first.
    pub fn into_records(self) -> impl Iterator<Item = MeasurementRecord> {
        core::iter::once(self.record).chain(self.derived)
    }
}

/// Returns the first whitespace-separated token of a trimmed field.
fn first_token(field: &str) -> Option<&str> {
    field.split_whitespace().next()
}

/// Parses the leading integer of `fields[index]`.
fn leading_integer(fields: &[&str], index: usize) -> Result<u64, ParseError> {
    let token = fields
        .get(index)
        .copied()
        .and_then(first_token)
        .ok_or(ParseError::MissingNumber { field: index })?;
    token.parse().map_err(|source| ParseError::InvalidNumber {
        field: index,
        value: token.to_string(),
        source,
    })
}

/// Splits the first field into benchmark name, variant name and entry count.
///
/// Any `-` suffix after the entry count (such as Go's `-8` GOMAXPROCS tag)
/// is ignored.
fn parse_name(field: &str) -> Result<(&str, &str, u64), ParseError> {
    let mut segments = field.split('/');
    let benchmark = segments.next().unwrap_or_default();
    let annotated = segments
        .next()
        .ok_or_else(|| ParseError::MissingVariant(field.to_string()))?;

    let mut parts = annotated.split('-');
    let variant = parts.next().unwrap_or_default();
    let count = parts
        .next()
        .ok_or_else(|| ParseError::MissingEntryCount(field.to_string()))?
        .trim();
    let n = count
        .parse()
        .map_err(|source| ParseError::InvalidEntryCount {
            value: count.to_string(),
            source,
        })?;

    Ok((benchmark, variant, n))
}

/// Whether `line` has the shape of a benchmark result line.
#[must_use]
pub fn is_candidate(line: &str, config: &ChartConfig) -> bool {
    let fields: Vec<&str> = line.split('\t').collect();
    has_result_shape(&fields, config)
}

/// Exact field count and the result-line prefix on the first field.
fn has_result_shape(fields: &[&str], config: &ChartConfig) -> bool {
    fields.len() == config.field_count
        && fields
            .first()
            .is_some_and(|name| name.starts_with(config.line_prefix.as_str()))
}

/// Decodes one line.
///
/// Returns `Ok(None)` for lines that are not benchmark results.
///
/// # Errors
///
/// Returns a [`ParseError`] when the line looks like a result but its name
/// or numeric fields cannot be decoded.
///
/// # Example
///
/// ```
/// use bench_chart::{ChartConfig, parse_line};
///
/// let config = ChartConfig::default();
/// let line = "BenchmarkFullReadsU64/robin-1000\t1\t1500000 ns/op\t0 B/op\tload=0.5\t-\t-\t-";
/// let parsed = parse_line(line, &config).unwrap().unwrap();
/// assert_eq!(parsed.record.variant_name, "robin");
/// assert_eq!(parsed.record.value, 1.5);
///
/// assert!(parse_line("PASS", &config).unwrap().is_none());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn parse_line(line: &str, config: &ChartConfig) -> Result<Option<ParsedLine>, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if !has_result_shape(&fields, config) {
        return Ok(None);
    }

    let (benchmark, variant, n) = parse_name(fields[0])?;
    let nanos = leading_integer(&fields, TIME_FIELD)?;
    let load = fields
        .get(LOAD_FIELD)
        .copied()
        .and_then(first_token)
        .unwrap_or_default();
    let annotation = format!("{LOAD_LABEL}{}", load.strip_prefix(LOAD_LABEL).unwrap_or(load));

    let derived = config
        .derived_for(benchmark)
        .map(|rule| derive_record(rule, &fields, variant, n, &annotation))
        .collect::<Result<Vec<_>, _>>()?;

    let record = MeasurementRecord {
        benchmark_name: benchmark.to_string(),
        variant_name: variant.to_string(),
        n,
        value: nanos as f64 / NANOS_PER_MILLI,
        annotation,
    };

    Ok(Some(ParsedLine { record, derived }))
}

#[allow(clippy::cast_precision_loss)]
fn derive_record(
    rule: &DerivedSeries,
    fields: &[&str],
    variant: &str,
    n: u64,
    annotation: &str,
) -> Result<MeasurementRecord, ParseError> {
    let raw = leading_integer(fields, rule.field)?;
    Ok(MeasurementRecord {
        benchmark_name: rule.group.clone(),
        variant_name: variant.to_string(),
        n,
        value: raw as f64 / rule.divisor,
        annotation: annotation.to_string(),
    })
}

/// Accumulates records line by line into a [`GroupedTable`].
#[derive(Debug)]
pub struct Extractor<'c> {
    config: &'c ChartConfig,
    table: GroupedTable,
    lines: usize,
    skipped: usize,
}

impl<'c> Extractor<'c> {
    /// Creates an extractor with an empty table.
    #[must_use]
    pub fn new(config: &'c ChartConfig) -> Self {
        Self {
            config,
            table: GroupedTable::new(),
            lines: 0,
            skipped: 0,
        }
    }

    /// Decodes the next input line and appends its records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with the 1-based line number when a candidate
    /// line cannot be decoded.
    pub fn feed(&mut self, line: &str) -> Result<(), Error> {
        self.lines += 1;
        let parsed = parse_line(line, self.config).map_err(|source| Error::Parse {
            line: self.lines,
            source,
        })?;

        let Some(parsed) = parsed else {
            self.skipped += 1;
            return Ok(());
        };

        for record in parsed.into_records() {
            tracing::trace!(
                benchmark = %record.benchmark_name,
                variant = %record.variant_name,
                n = record.n,
                value = record.value,
                "decoded record"
            );
            self.table.insert(record);
        }
        Ok(())
    }

    /// Number of lines fed so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of lines skipped because they are not result lines.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the completed table.
    #[must_use]
    pub fn finish(self) -> GroupedTable {
        tracing::debug!(
            lines = self.lines,
            skipped = self.skipped,
            "skipped non-result lines"
        );
        tracing::info!(
            groups = self.table.len(),
            points = self.table.point_count(),
            "extracted benchmark results"
        );
        self.table
    }
}

/// Builds the grouped table from `lines` with the default configuration.
///
/// # Errors
///
/// Returns [`Error::Parse`] on the first result line that cannot be decoded.
pub fn extract<I, S>(lines: I) -> Result<GroupedTable, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_with(lines, &ChartConfig::default())
}

/// Builds the grouped table from `lines`.
///
/// # Errors
///
/// Returns [`Error::Parse`] on the first result line that cannot be decoded.
pub fn extract_with<I, S>(lines: I, config: &ChartConfig) -> Result<GroupedTable, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = Extractor::new(config);
    for line in lines {
        extractor.feed(line.as_ref())?;
    }
    Ok(extractor.finish())
}

/// Builds the grouped table from a buffered reader, one line at a time.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails (including invalid UTF-8) and
/// [`Error::Parse`] on the first result line that cannot be decoded.
pub fn extract_reader<R: BufRead>(reader: R, config: &ChartConfig) -> Result<GroupedTable, Error> {
    let mut extractor = Extractor::new(config);
    for line in reader.lines() {
        extractor.feed(&line?)?;
    }
    Ok(extractor.finish())
}
