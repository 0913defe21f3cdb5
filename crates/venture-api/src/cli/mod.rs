//! CLI command definitions for the `venture` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod simulate;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Simulate a 30-day AI startup with LLM-driven personas.
#[derive(Parser)]
#[command(name = "venture", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export traces via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full simulation for a product idea.
    Simulate {
        /// Product idea to simulate.
        #[arg(long)]
        product: String,
    },

    /// Start the web front-end.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}
