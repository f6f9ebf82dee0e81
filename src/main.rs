//! # zataar CLI
//!
//! This is the binary entry point for the `zataar` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and output preferences.
//! - Executing the appropriate command and turning library errors into a
//!   non-zero exit status.
//!
//! Planning, rendering and execution live in the `zataar` library crate;
//! the binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
