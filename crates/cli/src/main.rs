//! `exchange`: swap two integer cells and report the result.
//!
//! Cells start at 100 and 200. After one exchange the first cell holds 200,
//! which becomes the process exit status. Nothing is written to stdout.
//!
//! Diagnostics go to stderr and follow `RUST_LOG` (default `warn`), e.g.
//! `RUST_LOG=debug exchange; echo $?`.

mod demo;

use std::process::ExitCode;

use demo::DemoOptions;
use tracing::debug;

fn main() -> ExitCode {
    init_logging();

    let outcome = demo::run(DemoOptions::default());
    let status = outcome.exit_status();
    debug!(first = %outcome.first, second = %outcome.second, status, "exiting");
    ExitCode::from(status)
}

fn init_logging() {
    use tracing_subscriber::{
        filter::{EnvFilter, LevelFilter},
        prelude::*,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_target(false)
                .without_time()
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::WARN.into())
                        .from_env_lossy(),
                ),
        )
        .init();
}
