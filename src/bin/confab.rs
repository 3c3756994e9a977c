//! Confab CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use confab::cli::args::*;
use confab::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = ConfabArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: ConfabArgs) -> anyhow::Result<()> {
    let command = match &args.command {
        Command::Chat(_) => "chat",
        Command::Classify(_) => "classify",
        Command::Validate(_) => "validate",
    };
    execute_command(args).with_context(|| format!("{command} failed"))
}
