//! Tests of the `bench-chart` binary: stdin in, document out, exit status.
//!
//! The document must only appear once the whole input was accepted; any
//! fatal decode error leaves stdout empty and exits with status 1.

use assert_cmd::Command;
use predicates::prelude::*;

// =============================================================================
// Helper functions
// =============================================================================

const GOOD_LINE: &str = "BenchmarkRandomFullInsertsInsertsU64/robin-10-8\t  1000\t500000 ns/op\t4194304 B/op\t0.75 Load\t10 N-runs\t0 allocs/op\t1 x";
const BAD_LINE: &str = "BenchmarkRandomFullInsertsInsertsU64/robin-lots-8\t  1000\t500000 ns/op\t4194304 B/op\t0.75 Load\t10 N-runs\t0 allocs/op\t1 x";

fn bench_chart() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bench-chart"))
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_success_writes_document() {
    let input = format!("goos: linux\n{GOOD_LINE}\nPASS\n");
    bench_chart()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<div id='BenchmarkRandomFullInsertsInsertsU64'>"))
        .stdout(predicate::str::contains("<div id='MemoryConsumption'>"))
        .stdout(predicate::str::ends_with("</body>\n</html>\n"));
}

#[test]
fn test_empty_input_writes_bare_document() {
    bench_chart()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Hashmap Benchmark</title>"))
        .stdout(predicate::str::contains("Plotly.newPlot(").not());
}

#[test]
fn test_malformed_line_fails_without_output() {
    let input = format!("goos: linux\n{GOOD_LINE}\n{BAD_LINE}\n");
    let assert = bench_chart()
        .write_stdin(input)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("error:").count(), 1, "{stderr}");
    assert!(stderr.contains("line 3: invalid entry count `lots`"), "{stderr}");
}

#[test]
fn test_invalid_utf8_fails_without_output() {
    bench_chart()
        .write_stdin(&b"goos: linux\n\xff\xfe\n"[..])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read benchmark output"));
}
