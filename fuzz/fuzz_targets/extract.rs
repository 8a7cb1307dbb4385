//! Extraction fuzzer.
//!
//! Tests that extracting and rendering arbitrary text never panics and that
//! every successfully extracted group gets a chart.

use bench_chart::testing::test_extract;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            test_extract(data);
        });
    }
}
