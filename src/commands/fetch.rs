//! Fetch command implementation
//!
//! Prints, as a shell script, the `git fetch` commands that bring every named
//! manifest source into its `upstream/<name>` branch. Nothing is fetched.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use zataar::manifest::{fetch_commands, FetchLine, Manifest, DEFAULT_MANIFEST};

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Upstream manifest to read
    #[arg(long, value_name = "PATH", env = "ZATAAR_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

/// Execute the fetch command
pub fn execute(args: FetchArgs) -> Result<()> {
    let manifest = Manifest::from_file(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    println!(
        "# Loaded {} sources from {}",
        manifest.sources.len(),
        args.manifest.display()
    );
    for line in fetch_commands(&manifest) {
        match line {
            FetchLine::Fetch { command, .. } => println!("{}", command),
            FetchLine::SkippedUnnamed => println!("# skipping unnamed source"),
        }
    }
    Ok(())
}
