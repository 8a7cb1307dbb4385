//! Helpers driving the fuzz targets.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`test_extract`]: run the whole pipeline over arbitrary bytes
//! - [`FuzzLine`]: a structurally valid result line with arbitrary contents
//! - [`test_emit`]: check that well-formed lines always render, one chart per group

use arbitrary::Arbitrary;

use crate::config::ChartConfig;
use crate::html::{PLOT_CALL, emit_with};
use crate::parser::extract_with;

/// Runs extraction and, if it succeeds, rendering over arbitrary input.
///
/// # Panics
///
/// Panics if a successfully extracted table does not render one chart per
/// group.
pub fn test_extract(data: &[u8]) {
    let config = ChartConfig::default();
    let text = String::from_utf8_lossy(data);
    let Ok(table) = extract_with(text.lines(), &config) else {
        return;
    };
    let doc = emit_with(&table, &config);
    assert_eq!(doc.matches(PLOT_CALL).count(), table.len());
    assert!(doc.ends_with("</html>\n"));
}

/// A benchmark result line with arbitrary names and numbers.
#[derive(Debug, Clone, Arbitrary)]
pub struct FuzzLine {
    /// Benchmark name, without the `Benchmark` prefix.
    pub group: String,
    /// Variant name.
    pub variant: String,
    /// Entry count.
    pub n: u64,
    /// Nanoseconds per operation.
    pub nanos: u64,
    /// Bytes per operation.
    pub bytes: u64,
    /// Load factor label.
    pub load: String,
}

impl FuzzLine {
    /// Renders the line in the harness format, dropping characters that
    /// would change its structure.
    #[must_use]
    pub fn render(&self) -> String {
        fn strip(value: &str, forbidden: &[char]) -> String {
            value
                .chars()
                .filter(|c| !c.is_whitespace() && !c.is_control() && !forbidden.contains(c))
                .collect()
        }
        let group = strip(&self.group, &['/']);
        let variant = strip(&self.variant, &['/', '-']);
        let load = strip(&self.load, &[]);
        format!(
            "Benchmark{group}/{variant}-{}\t1\t{} ns/op\t{} B/op\tload={load}\t-\t-\t-",
            self.n, self.nanos, self.bytes
        )
    }
}

/// Renders `lines` and checks that every group got exactly one chart and
/// that no name escaped its script.
///
/// # Panics
///
/// Panics if extraction fails or the document is not well-formed.
pub fn test_emit(lines: &[FuzzLine]) {
    let config = ChartConfig::default();
    let rendered: Vec<String> = lines.iter().map(FuzzLine::render).collect();
    let table = extract_with(&rendered, &config).expect("well-formed lines must parse");

    let expected_points: usize = rendered
        .iter()
        .map(|line| {
            let name = line.split('/').next().unwrap_or_default();
            1 + config.derived_for(name).count()
        })
        .sum();
    assert_eq!(table.point_count(), expected_points);

    let doc = emit_with(&table, &config);
    assert_eq!(doc.matches(PLOT_CALL).count(), table.len());
    assert_eq!(doc.matches("</script>").count(), table.len() + 1);
}
