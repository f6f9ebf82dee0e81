//! # Plan Execution
//!
//! The planner only describes a build; an [`Executor`] carries it out.
//!
//! Execution is all-or-nothing from the caller's point of view: operations
//! run in plan order, the first failure stops the build and is returned
//! as-is. There is no retry and no attempt to resume. Intermediate branches
//! of a failed build stay in its private namespace; only [`promote`] points
//! a caller-chosen branch at the result, and it is meant to be called after
//! [`Executor::run`] succeeded.

use crate::error::{Error, Result};
use crate::git::{self, GitCommand};
use crate::plan::{Operation, Plan};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Applies plan operations to a repository.
pub trait Executor {
    /// Apply a single operation.
    fn apply(&mut self, op: &Operation) -> Result<()>;

    /// Apply every operation of `plan` in order, stopping at the first error.
    fn run(&mut self, plan: &Plan) -> Result<()> {
        info!(
            "Running build {} ({} steps)",
            plan.build_id,
            plan.operations.len()
        );
        for (step, op) in plan.operations.iter().enumerate() {
            debug!("step {}: {}", step, op.label());
            self.apply(op)?;
        }
        info!("Build {} complete: {}", plan.build_id, plan.destination);
        Ok(())
    }
}

/// Executes operations with the system `git` in one working tree.
///
/// A repository has a single checked-out state, so one `GitExecutor` must
/// not share its working tree with another running build.
#[derive(Debug, Clone)]
pub struct GitExecutor {
    toplevel: PathBuf,
}

impl GitExecutor {
    /// Open the repository containing `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        let toplevel = git::show_toplevel(dir)?;
        debug!("using repository at {}", toplevel.display());
        Ok(Self { toplevel })
    }

    pub fn toplevel(&self) -> &Path {
        &self.toplevel
    }

    fn run_command(&self, step: &str, cmd: &GitCommand) -> Result<()> {
        debug!("{}", cmd.display());
        let output = git::run(&self.toplevel, cmd)?;
        if output.status.success() || cmd.may_fail {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(Error::Step {
            step: step.to_string(),
            command: cmd.display(),
            stderr,
        })
    }
}

impl Executor for GitExecutor {
    fn apply(&mut self, op: &Operation) -> Result<()> {
        let step = op.label();
        for cmd in git::commands(op) {
            self.run_command(&step, &cmd)?;
        }
        Ok(())
    }
}

/// Point `branch` at the destination of a finished build.
pub fn promote(executor: &mut dyn Executor, plan: &Plan, branch: &str) -> Result<()> {
    info!("Promoting {} to {}", plan.destination, branch);
    executor.apply(&Operation::DuplicateBranch {
        source: plan.destination.clone(),
        target: branch.to_string(),
    })
}
