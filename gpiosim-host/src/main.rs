//! gpiosim - GPIO Output Register Simulator
//!
//! Runs the LED blink check against a simulated nRF52840 port 0 and
//! reports the verdict through the exit code:
//!
//! - `0`: toggle count matched the expected count
//! - `1`: toggle count mismatch
//! - `2`: the test could not run (bad configuration, console failure)
//!
//! stdout carries the test transcript; diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gpiosim_core::{BlinkTest, RegisterModel};
use gpiosim_host::{load_embedded, ConsoleReporter};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> anyhow::Result<ExitCode> {
    let config = load_embedded()?;
    let test = BlinkTest::new(config);

    let mut reporter = ConsoleReporter::new(io::stdout().lock());
    reporter.header();

    let mut model = RegisterModel::with_observer(reporter);
    let verification = test.run(&mut model).context("blink test aborted")?;
    info!(
        observed = verification.observed,
        expected = verification.expected,
        passed = verification.passed(),
        "verification finished"
    );

    model
        .into_observer()
        .finish()
        .context("failed to write test transcript")?;

    Ok(ExitCode::from(verification.exit_code()))
}
