//! Measurement records produced by the extractor.

/// One decoded measurement, as produced from a single benchmark result line.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// Benchmark family, e.g. `BenchmarkRandomFullInsertsInsertsU64`.
    pub benchmark_name: String,
    /// Implementation being measured, e.g. `RobinHood`.
    pub variant_name: String,
    /// Number of entries in the measured data structure.
    pub n: u64,
    /// Milliseconds per operation, or megabytes for a derived memory record.
    pub value: f64,
    /// Display-only hover label such as `load=0.75`.
    pub annotation: String,
}

impl MeasurementRecord {
    /// Splits the record into its grouping keys and the point to plot.
    #[must_use]
    pub fn into_parts(self) -> (String, String, Point) {
        (
            self.benchmark_name,
            self.variant_name,
            Point {
                n: self.n,
                value: self.value,
                annotation: self.annotation,
            },
        )
    }
}

/// A single plotted point of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub n: u64,
    /// Y coordinate.
    pub value: f64,
    /// Hover text.
    pub annotation: String,
}
