//! CLI argument parsing and command dispatch

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;
use zataar::output::{ColorChoice, OutputConfig};

/// zataar - Assemble meta-repository branches from path mappings
#[derive(Parser, Debug)]
#[command(name = "zataar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorChoice,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        env = "ZATAAR_LOG"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the operation plan that transforms a branch
    Plan(commands::plan::PlanArgs),

    /// Plan a transformation and execute it in a local repository
    Run(commands::run::RunArgs),

    /// Print fetch commands for the sources of an upstream manifest
    Fetch(commands::fetch::FetchArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;
        let out = OutputConfig::new(self.color);

        match self.command {
            Commands::Plan(args) => commands::plan::execute(args),
            Commands::Run(args) => commands::run::execute(args, &out),
            Commands::Fetch(args) => commands::fetch::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Log to stderr so stdout only carries plans and command output.
/// `RUST_LOG`, when set, refines the level given on the command line.
fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("invalid log level '{}'", level))?;
    // a logger may already be installed when running inside tests
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
    Ok(())
}
