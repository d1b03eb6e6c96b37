//! Sungrove -- reads a 37-cell board and per-turn game state from stdin.
//!
//! The board is echoed to stdout in its input format once it has been built
//! and validated, followed by every turn as it is read. Diagnostics go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter};

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sungrove::engine::run;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(stdin.lock(), &mut out) {
        Ok(summary) => {
            info!(turns = summary.turns, "input exhausted");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "session aborted");
            Err(e).context("failed to process game input")
        }
    }
}
