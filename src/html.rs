//! Rendering of a [`GroupedTable`] as a self-contained HTML document.
//!
//! Every benchmark group becomes one `<div>` holding an inline script that
//! declares one scatter trace per variant, a layout, and a `Plotly.newPlot`
//! call targeting the `<div>`. The charting runtime itself is loaded from
//! [`ChartConfig::runtime_url`].
//!
//! Groups are emitted in ascending name order, variants in first-seen order
//! and points in input order, so identical input always yields an identical
//! document.

use std::collections::HashSet;

use serde_json::Value;

use crate::config::ChartConfig;
use crate::record::Point;
use crate::sanitize::{html_escape, script_identifier, script_string, script_value};
use crate::table::{GroupedTable, VariantSeries};

/// Separator written after every chart block.
pub const DIVIDER: &str = "<hr>";
/// Function call that renders one chart block.
pub const PLOT_CALL: &str = "Plotly.newPlot(";

/// Incrementally builds the chart document.
#[derive(Debug)]
pub struct ChartBuilder<'c> {
    config: &'c ChartConfig,
    out: String,
    identifiers: HashSet<String>,
    charts: usize,
}

impl<'c> ChartBuilder<'c> {
    /// Starts a document and writes its preamble.
    #[must_use]
    pub fn new(config: &'c ChartConfig) -> Self {
        let title = html_escape(&config.title);
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str("    <title>");
        out.push_str(&title);
        out.push_str("</title>\n");
        out.push_str("    <script src='");
        out.push_str(&html_escape(&config.runtime_url));
        out.push_str("'></script>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str("    <h1 align=\"center\">");
        out.push_str(&title);
        out.push_str("</h1>\n    ");
        out.push_str(DIVIDER);
        out.push('\n');

        Self {
            config,
            out,
            identifiers: HashSet::new(),
            charts: 0,
        }
    }

    /// Returns a document-wide unique script identifier derived from `name`.
    fn identifier(&mut self, name: &str) -> String {
        let base = script_identifier(name);
        if base != name {
            tracing::warn!(name, identifier = %base, "name is not a valid script identifier");
        }

        let mut candidate = base.to_string();
        let mut suffix = 1;
        while self.identifiers.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }
        self.identifiers.insert(candidate.clone());
        candidate
    }

    /// Appends the chart block of `group`.
    pub fn chart(&mut self, group: &str, variants: &VariantSeries) {
        let data = self.identifier(&format!("data_{group}"));
        let layout = self.identifier(&format!("layout_{group}"));

        self.out.push_str("<div id='");
        self.out.push_str(&html_escape(group));
        self.out.push_str("'><script>\n");

        let mut traces = Vec::with_capacity(variants.len());
        for (variant, points) in variants {
            let trace = self.identifier(&format!("{group}_{variant}"));
            self.trace(&trace, variant, points);
            traces.push(trace);
        }

        self.out.push_str("var ");
        self.out.push_str(&data);
        self.out.push_str(" = [");
        self.out.push_str(&traces.join(", "));
        self.out.push_str("];\n");

        self.out.push_str("var ");
        self.out.push_str(&layout);
        self.out.push_str(" = {title: ");
        self.out.push_str(&script_string(group));
        self.out.push_str(", xaxis: {title: ");
        self.out.push_str(&script_string(&self.config.x_axis_title));
        self.out.push_str("}, yaxis: {title: ");
        self.out.push_str(&script_string(self.config.y_axis_title_for(group)));
        self.out.push_str("}};\n");

        self.out.push_str(PLOT_CALL);
        self.out.push_str(&script_string(group));
        self.out.push_str(", ");
        self.out.push_str(&data);
        self.out.push_str(", ");
        self.out.push_str(&layout);
        self.out.push_str(");\n");

        self.out.push_str("</script></div>");
        self.out.push_str(DIVIDER);
        self.out.push('\n');
        self.charts += 1;
    }

    /// Writes one `var <ident> = {...};` scatter trace.
    fn trace(&mut self, ident: &str, variant: &str, points: &[Point]) {
        let x: Value = points.iter().map(|p| p.n).collect();
        let y: Value = points.iter().map(|p| p.value).collect();
        let text: Value = points.iter().map(|p| p.annotation.as_str()).collect();

        self.out.push_str("var ");
        self.out.push_str(ident);
        self.out.push_str(" = {\n    name: ");
        self.out.push_str(&script_string(variant));
        self.out.push_str(",\n    x: ");
        self.out.push_str(&script_value(&x));
        self.out.push_str(",\n    y: ");
        self.out.push_str(&script_value(&y));
        self.out.push_str(",\n    text: ");
        self.out.push_str(&script_value(&text));
        self.out.push_str(",\n    mode: 'lines+markers', type: 'scatter'\n};\n");
    }

    /// Number of chart blocks written so far.
    #[must_use]
    pub fn charts(&self) -> usize {
        self.charts
    }

    /// Writes the closing section and returns the document.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.out.push_str("</body>\n</html>\n");
        tracing::info!(
            charts = self.charts,
            bytes = self.out.len(),
            "rendered chart document"
        );
        self.out
    }
}

/// Renders `table` with the default configuration.
#[must_use]
pub fn emit(table: &GroupedTable) -> String {
    emit_with(table, &ChartConfig::default())
}

/// Renders `table` as an HTML document, one chart per benchmark group.
#[must_use]
pub fn emit_with(table: &GroupedTable, config: &ChartConfig) -> String {
    let mut builder = ChartBuilder::new(config);
    for (group, variants) in table.groups() {
        builder.chart(group, variants);
    }
    builder.finish()
}
