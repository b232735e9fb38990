//! Command dispatch logic for seedweave

use std::time::Instant;

use crate::cli::{Cli, Commands};
use seedweave_core::error::Result;
use tracing::debug;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        println!("seedweave {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    };

    // Single-threaded: the engine awaits one neighbor fetch at a time
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    debug!(elapsed = ?start.elapsed(), "runtime_ready");

    match command {
        Commands::Sample(args) => runtime.block_on(super::sample::execute(cli, args)),
        Commands::Inspect(args) => runtime.block_on(super::inspect::execute(cli, args)),
    }
}
