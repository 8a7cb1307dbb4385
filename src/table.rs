//! Two-level grouping of measurements: benchmark → variant → points.
//!
//! Benchmark groups are kept in a [`BTreeMap`] so they always iterate in
//! ascending lexicographic order, which makes the emitted document stable
//! across runs. Variants within a group keep the order in which they were
//! first seen ([`IndexMap`]), and points keep input order.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::record::{MeasurementRecord, Point};

/// Series of one group, keyed by variant name in first-seen order.
pub type VariantSeries = IndexMap<String, Vec<Point>>;

/// Measurements grouped by benchmark name and variant name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedTable {
    groups: BTreeMap<String, VariantSeries>,
}

impl GroupedTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its `(benchmark, variant)` series, creating the
    /// group and series on first use.
    pub fn insert(&mut self, record: MeasurementRecord) {
        let (group, variant, point) = record.into_parts();
        self.push(group, variant, point);
    }

    /// Appends a point to the series of `variant` within `group`.
    pub fn push(&mut self, group: impl Into<String>, variant: impl Into<String>, point: Point) {
        self.groups
            .entry(group.into())
            .or_default()
            .entry(variant.into())
            .or_default()
            .push(point);
    }

    /// Iterates over groups in ascending name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &VariantSeries)> {
        self.groups.iter().map(|(name, series)| (name.as_str(), series))
    }

    /// Returns the series of a single group.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&VariantSeries> {
        self.groups.get(name)
    }

    /// Returns the points recorded for `variant` within `group`.
    #[must_use]
    pub fn series(&self, group: &str, variant: &str) -> Option<&[Point]> {
        self.groups
            .get(group)
            .and_then(|variants| variants.get(variant))
            .map(Vec::as_slice)
    }

    /// Number of benchmark groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no record has been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of points across all groups and variants.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(n: u64, value: f64) -> Point {
        Point {
            n,
            value,
            annotation: "load=0.5".to_string(),
        }
    }

    #[test]
    fn test_groups_are_sorted() {
        let mut table = GroupedTable::new();
        table.push("Zeta", "a", point(1, 1.0));
        table.push("Alpha", "a", point(1, 1.0));
        table.push("MemoryConsumption", "a", point(1, 1.0));

        let names: Vec<&str> = table.groups().map(|(name, _)| name).collect();
        assert_eq!(names, ["Alpha", "MemoryConsumption", "Zeta"]);
    }

    #[test]
    fn test_variants_keep_first_seen_order() {
        let mut table = GroupedTable::new();
        table.push("G", "robin", point(1, 1.0));
        table.push("G", "go", point(1, 2.0));
        table.push("G", "robin", point(2, 3.0));
        table.push("G", "builtin", point(1, 4.0));

        let variants: Vec<&str> = table
            .group("G")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(variants, ["robin", "go", "builtin"]);
    }

    #[test]
    fn test_points_keep_insertion_order() {
        let mut table = GroupedTable::new();
        table.push("G", "robin", point(1000, 3.0));
        table.push("G", "robin", point(10, 1.0));
        table.push("G", "robin", point(100, 2.0));

        let xs: Vec<u64> = table
            .series("G", "robin")
            .unwrap()
            .iter()
            .map(|p| p.n)
            .collect();
        assert_eq!(xs, [1000, 10, 100]);
    }

    #[test]
    fn test_insert_record() {
        let mut table = GroupedTable::new();
        table.insert(MeasurementRecord {
            benchmark_name: "BenchmarkFullReadsU64".to_string(),
            variant_name: "swiss".to_string(),
            n: 64,
            value: 0.25,
            annotation: "load=0.5".to_string(),
        });

        assert_eq!(table.len(), 1);
        assert_eq!(table.point_count(), 1);
        assert_eq!(
            table.series("BenchmarkFullReadsU64", "swiss"),
            Some(&[point(64, 0.25)][..])
        );
        assert!(table.series("BenchmarkFullReadsU64", "robin").is_none());
        assert!(table.series("Missing", "swiss").is_none());
    }

    #[test]
    fn test_empty() {
        let table = GroupedTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.point_count(), 0);
    }
}
