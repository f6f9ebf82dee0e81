//! Run command implementation
//!
//! Plans a build and executes it in a local repository with the system
//! `git`. The first failing step aborts the build; `--promote` is only
//! applied once every step succeeded.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::plan::BuildArgs;
use zataar::executor::{promote, Executor, GitExecutor};
use zataar::output::{OutputConfig, Status};

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Repository to run the build in
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Point this branch at the result once the build succeeded
    #[arg(long, value_name = "BRANCH")]
    pub promote: Option<String>,
}

/// Execute the run command
pub fn execute(args: RunArgs, out: &OutputConfig) -> Result<()> {
    let plan = args.build.build_plan()?;
    let mut executor = GitExecutor::open(&args.repo)?;

    println!(
        "{}",
        out.status(
            Status::Info,
            &format!(
                "Build {}: {} -> {} ({} steps)",
                plan.build_id,
                plan.input_branch,
                plan.destination,
                plan.operations.len()
            )
        )
    );

    if let Err(e) = executor.run(&plan) {
        println!(
            "{}",
            out.status(Status::Failed, &format!("Build {} failed", plan.build_id))
        );
        return Err(e.into());
    }

    println!(
        "{}",
        out.status(
            Status::Ok,
            &format!("Build {} assembled on {}", plan.build_id, plan.destination)
        )
    );

    if let Some(branch) = &args.promote {
        promote(&mut executor, &plan, branch)?;
        println!(
            "{}",
            out.status(Status::Ok, &format!("Promoted {} to {}", plan.destination, branch))
        );
    }

    Ok(())
}
