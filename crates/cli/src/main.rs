// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod app;
mod console;

#[cfg(test)]
mod tests;

use app::App;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use console::Console;
use sportsplex::{InMemoryLedger, SystemClock};
use sportsplex_persistence::JsonFileLedger;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Sportsplex - counter terminal for facility bookings and rentals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON ledger file. If not provided, bookings are kept in memory.
    #[arg(short, long)]
    ledger: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so they never interleave with the menus
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.verbosity.log_level_filter().as_trace().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    if let Some(path) = &args.ledger {
        info!("Using ledger file at: {}", path.display());
        let ledger: JsonFileLedger = JsonFileLedger::open(path)
            .wrap_err_with(|| format!("Failed to open ledger {}", path.display()))?;
        App::new(ledger, SystemClock, console).run()
    } else {
        info!("Using in-memory ledger");
        App::new(InMemoryLedger::new(), SystemClock, console).run()
    }
}
