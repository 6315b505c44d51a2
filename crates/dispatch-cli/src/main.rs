//! Dispatch Board - trucker/payload assignment tracking
//!
//! A CLI front end over the dispatch core: assign truckers to payloads,
//! walk each load through its lifecycle, and persist the board locally.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
