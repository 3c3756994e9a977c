//! Command line argument parsing for the Confab CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Confab - a small intent-classification chatbot
#[derive(Parser, Debug, Clone)]
#[command(name = "confab")]
#[command(about = "A small intent-classification chatbot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConfabArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConfabArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive conversation
    Chat(ChatArgs),

    /// Classify a single message and print a reply
    Classify(ClassifyArgs),

    /// Check an intent catalog
    Validate(ValidateArgs),
}

/// Where the catalog and classifier settings come from
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Intent catalog file (JSON); the built-in catalog is used if omitted
    #[arg(short, long, value_name = "CATALOG_FILE", env = "CONFAB_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Classifier configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for an interactive chat
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Seed for reply selection (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for classifying one message
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Message to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Seed for reply selection (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Also print the probability of every intent
    #[arg(long)]
    pub all_scores: bool,
}

/// Arguments for validating a catalog
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Intent catalog file (JSON); the built-in catalog is used if omitted
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
