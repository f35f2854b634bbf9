// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `fyyur` - manage venues, artists and shows from the command line.
//!
//! Results are written to stdout as pretty-printed JSON. Logs go to
//! stderr; `RUST_LOG` overrides the `-v`/`-q` level.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use fyyur_persistence::Persistence;
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// The database path that selects a private in-memory database.
const IN_MEMORY_DATABASE: &str = ":memory:";

/// Fyyur - venue, artist and show booking directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file, or `:memory:`.
    #[arg(short, long, default_value = "fyyur.db")]
    database: String,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn open_persistence(database: &str) -> Result<Persistence, fyyur_persistence::PersistenceError> {
    if database == IN_MEMORY_DATABASE {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    } else {
        info!("Using file-based database at: {}", database);
        Persistence::new_with_file(database)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .init();

    let mut persistence: Persistence = open_persistence(&args.database)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = commands::run(
        args.command,
        &mut persistence,
        stdin.lock(),
        &mut stdout.lock(),
        OffsetDateTime::now_utc(),
    );

    if let Err(err) = result {
        error!(error = ?err, "Command failed");
        eprintln!("{err}");
        std::process::exit(1);
    }

    Ok(())
}
