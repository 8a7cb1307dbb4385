//! `bench-chart`: reads `go test -bench` output on stdin and writes an HTML
//! chart document to stdout.
//!
//! Run: `go test -bench . | bench-chart > chart.html`
//!
//! Diagnostics go to stderr; their verbosity follows `RUST_LOG` (default
//! `warn`). Stdout is written only after the whole input was processed.

use std::io::{self, Write};
use std::process::ExitCode;

use bench_chart::{ChartConfig, Error, render_document};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), Error> {
    let config = ChartConfig::default();
    let document = render_document(io::stdin().lock(), &config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(line = e.line(), "aborting without output");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
