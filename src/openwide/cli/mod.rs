//! # CLI Layer
//!
//! The text menu is **one possible client** of the registry. This layer is the
//! only place that:
//! - Parses command-line flags
//! - Installs the tracing subscriber
//! - Reads stdin and writes stdout
//!
//! ## Structure
//!
//! - `run()`: flag parsing, logging, config, then hands stdin/stdout to a [`menu::Session`]
//! - `setup`: clap definitions and menu choice parsing
//! - `menu`: the prompt/dispatch loop
//! - `print`: output formatting

mod menu;
mod print;
mod setup;

use clap::Parser;
use openwide::api::ClinicApi;
use openwide::clock::SystemClock;
use openwide::config::ClinicConfig;
use openwide::error::Result;
use openwide::store::memory::InMemoryStore;
use setup::Cli;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let api = ClinicApi::new(InMemoryStore::new(), SystemClock);
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::Session::new(api, config, stdin.lock(), stdout.lock()).run()
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "openwide=debug"
    } else {
        "openwide=error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<ClinicConfig> {
    match &cli.config {
        Some(path) => ClinicConfig::load_file(path),
        None => match ClinicConfig::default_dir() {
            Some(dir) => ClinicConfig::load(dir),
            None => Ok(ClinicConfig::default()),
        },
    }
}
