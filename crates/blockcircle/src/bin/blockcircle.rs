//! # BLOCKCIRCLE Command Line
//!
//! ```bash
//! # Radius 12 filled circle, PNG + JSON into ./out
//! blockcircle --radius 12 --mode filled --out-dir out
//!
//! # Only the block list, with stats, verbose logs
//! RUST_LOG=debug blockcircle -r 30 --json --stats
//! ```

use std::process::ExitCode;

use blockcircle::{cli, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Cli::parse();
    match cli::run(&args) {
        Ok(written) => {
            for path in written {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
