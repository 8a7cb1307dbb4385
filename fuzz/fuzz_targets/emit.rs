//! Rendering fuzzer.
//!
//! Feeds well-formed result lines with arbitrary names and numbers and checks
//! that names never break out of their chart scripts.

use arbitrary::{Arbitrary, Unstructured};
use bench_chart::testing::{FuzzLine, test_emit};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let mut u = Unstructured::new(data);
            if let Ok(lines) = Vec::<FuzzLine>::arbitrary(&mut u) {
                test_emit(&lines);
            }
        });
    }
}
