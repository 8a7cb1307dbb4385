//! Fixed settings of the extractor and emitter.
//!
//! The binary always runs with [`ChartConfig::default`]; the type exists so
//! that the literals coupling the parser to one particular benchmark suite are
//! data rather than code.

/// Prefix marking a benchmark result line.
pub const DEFAULT_LINE_PREFIX: &str = "Benchmark";
/// Number of tab-separated fields in a benchmark result line.
pub const DEFAULT_FIELD_COUNT: usize = 8;
/// Document title and heading.
pub const DEFAULT_TITLE: &str = "Hashmap Benchmark";
/// Charting runtime loaded by the document.
pub const DEFAULT_RUNTIME_URL: &str = "https://cdn.plot.ly/plotly-2.20.0.min.js";
/// X-axis title shared by every chart.
pub const DEFAULT_X_AXIS_TITLE: &str = "number of entries in hash table";
/// Y-axis title of timing charts.
pub const DEFAULT_Y_AXIS_TITLE: &str = "time (ms)";
/// Group receiving the memory series derived from insert benchmarks.
pub const MEMORY_GROUP: &str = "MemoryConsumption";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A rule synthesizing an extra record from a matching benchmark line.
///
/// When a benchmark name contains [`pattern`](Self::pattern), the first
/// numeric token of [`field`](Self::field) is divided by
/// [`divisor`](Self::divisor) and recorded under [`group`](Self::group)
/// with the same variant, `n` and annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    /// Substring the benchmark name must contain.
    pub pattern: String,
    /// Group the synthesized records go to.
    pub group: String,
    /// Index of the tab-separated field holding the raw integer.
    pub field: usize,
    /// Unit conversion applied to the raw integer.
    pub divisor: f64,
    /// Y-axis title of the chart for [`group`](Self::group).
    pub y_axis_title: String,
}

impl DerivedSeries {
    /// Memory consumption in megabytes, read from the `B/op` column of the
    /// full-insert benchmark.
    #[must_use]
    pub fn memory_consumption() -> Self {
        Self {
            pattern: "BenchmarkRandomFullInsertsInsertsU64".to_string(),
            group: MEMORY_GROUP.to_string(),
            field: 3,
            divisor: BYTES_PER_MB,
            y_axis_title: "memory (MB)".to_string(),
        }
    }

    /// Whether this rule applies to `benchmark_name`.
    #[must_use]
    pub fn matches(&self, benchmark_name: &str) -> bool {
        benchmark_name.contains(self.pattern.as_str())
    }
}

/// Settings shared by the extractor and the emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Document title and page heading.
    pub title: String,
    /// URL of the charting runtime script.
    pub runtime_url: String,
    /// X-axis title of every chart.
    pub x_axis_title: String,
    /// Y-axis title of groups not produced by a derived rule.
    pub y_axis_title: String,
    /// Literal prefix of the first field of a result line.
    pub line_prefix: String,
    /// Exact number of tab-separated fields of a result line.
    pub field_count: usize,
    /// Derived series rules, tried in order on every result line.
    pub derived: Vec<DerivedSeries>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            runtime_url: DEFAULT_RUNTIME_URL.to_string(),
            x_axis_title: DEFAULT_X_AXIS_TITLE.to_string(),
            y_axis_title: DEFAULT_Y_AXIS_TITLE.to_string(),
            line_prefix: DEFAULT_LINE_PREFIX.to_string(),
            field_count: DEFAULT_FIELD_COUNT,
            derived: vec![DerivedSeries::memory_consumption()],
        }
    }
}

impl ChartConfig {
    /// Sets the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the charting runtime URL.
    #[must_use]
    pub fn with_runtime_url(mut self, url: impl Into<String>) -> Self {
        self.runtime_url = url.into();
        self
    }

    /// Sets the x-axis title.
    #[must_use]
    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = title.into();
        self
    }

    /// Adds a derived series rule.
    #[must_use]
    pub fn with_derived(mut self, rule: DerivedSeries) -> Self {
        self.derived.push(rule);
        self
    }

    /// Removes every derived series rule.
    #[must_use]
    pub fn without_derived(mut self) -> Self {
        self.derived.clear();
        self
    }

    /// Y-axis title for the chart of `group`.
    #[must_use]
    pub fn y_axis_title_for(&self, group: &str) -> &str {
        self.derived
            .iter()
            .find(|rule| rule.group == group)
            .map_or(self.y_axis_title.as_str(), |rule| rule.y_axis_title.as_str())
    }

    /// Derived rules applying to `benchmark_name`, in configuration order.
    pub fn derived_for<'a>(
        &'a self,
        benchmark_name: &'a str,
    ) -> impl Iterator<Item = &'a DerivedSeries> + 'a {
        self.derived
            .iter()
            .filter(move |rule| rule.matches(benchmark_name))
    }
}
