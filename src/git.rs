//! Git invocations for plan operations.
//!
//! Each [`Operation`] maps to a short list of `git` invocations. The shell
//! renderer prints them and [`crate::executor::GitExecutor`] runs them, so
//! both always agree on what a step does.
//!
//! This uses the system git command, which picks up whatever identity and
//! configuration the user already has in `~/.gitconfig`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{Error, Result};
use crate::plan::Operation;

/// Environment that silences `git filter-branch`'s deprecation banner and
/// the pause that comes with it.
pub const FILTER_BRANCH_ENV: (&str, &str) = ("FILTER_BRANCH_SQUELCH_WARNING", "1");

/// A single `git` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    /// Arguments after `git`.
    pub args: Vec<String>,
    /// Extra environment for this invocation.
    pub env: Vec<(String, String)>,
    /// A failure of this command is expected and ignored.
    pub may_fail: bool,
    /// Must run from the top of the working tree.
    pub at_toplevel: bool,
}

impl GitCommand {
    fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
            may_fail: false,
            at_toplevel: false,
        }
    }

    fn may_fail(mut self) -> Self {
        self.may_fail = true;
        self
    }

    fn filter_branch(mut self) -> Self {
        self.env
            .push((FILTER_BRANCH_ENV.0.to_string(), FILTER_BRANCH_ENV.1.to_string()));
        self.at_toplevel = true;
        self
    }

    /// `git <args>` joined with spaces, for messages.
    pub fn display(&self) -> String {
        format!("git {}", self.args.join(" "))
    }
}

/// Tree filter that nests the whole tree under `dir`.
///
/// Entries go through the hidden `.<staging>` directory first so a top-level
/// entry named like the first component of `dir` is not clobbered. `find`
/// moves dot-entries too and succeeds on an empty tree, where a `*` glob
/// would not.
pub fn relocate_script(dir: &str, staging: &str) -> String {
    let tmp = quote(&format!(".{}", staging));
    let dir = quote(dir);
    [
        format!("mkdir {}", tmp),
        format!("find . -mindepth 1 -maxdepth 1 ! -name {tmp} -exec mv {{}} {tmp}/ \\;"),
        format!("mkdir -p {}", dir),
        format!("find {tmp} -mindepth 1 -maxdepth 1 -exec mv {{}} {dir}/ \\;"),
        format!("rmdir {}", tmp),
    ]
    .join(" && ")
}

/// The git invocations that carry out `op`, in order.
pub fn commands(op: &Operation) -> Vec<GitCommand> {
    match op {
        Operation::DuplicateBranch { source, target } => vec![
            GitCommand::new(["branch", "-D", target.as_str()]).may_fail(),
            GitCommand::new(["branch", "-f", target.as_str(), source.as_str()]),
        ],
        Operation::IsolatePath { branch, path } => vec![GitCommand::new([
            "filter-branch",
            "-f",
            "--subdirectory-filter",
            path.as_str(),
            branch.as_str(),
        ])
        .filter_branch()],
        Operation::RelocatePath {
            branch,
            path,
            staging,
        } => vec![GitCommand::new([
            "filter-branch".to_string(),
            "-f".to_string(),
            "--tree-filter".to_string(),
            relocate_script(path, staging),
            branch.clone(),
        ])
        .filter_branch()],
        // Phase one reconciles the trees on `top`, keeping top's side of
        // every conflict; phase two is then a plain merge back into bottom.
        Operation::MergeLayer { bottom, top } => vec![
            GitCommand::new(["checkout", top.as_str()]),
            GitCommand::new([
                "merge",
                "--no-edit",
                "--allow-unrelated-histories",
                "-X",
                "ours",
                bottom.as_str(),
            ]),
            GitCommand::new(["checkout", bottom.as_str()]),
            GitCommand::new([
                "merge",
                "--no-edit",
                "--allow-unrelated-histories",
                top.as_str(),
            ]),
        ],
    }
}

/// Quote `arg` for a POSIX shell. Plain words are left as they are.
pub fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Run `cmd` in `dir` and return its output, whatever the exit status.
pub fn run(dir: &Path, cmd: &GitCommand) -> Result<Output> {
    let mut command = Command::new("git");
    command.args(&cmd.args).current_dir(dir);
    for (key, value) in &cmd.env {
        command.env(key, value);
    }
    command.output().map_err(|e| Error::GitSpawn {
        command: cmd.display(),
        message: e.to_string(),
    })
}

/// Resolve the top of the working tree containing `dir`.
pub fn show_toplevel(dir: &Path) -> Result<PathBuf> {
    let cmd = GitCommand::new(["rev-parse", "--show-toplevel"]);
    let output = run(dir, &cmd)?;
    if !output.status.success() {
        return Err(Error::Step {
            step: "resolve repository".to_string(),
            command: cmd.display(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(PathBuf::from(stdout.trim()))
}
