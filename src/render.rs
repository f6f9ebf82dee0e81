//! # Plan Rendering
//!
//! Serializes a [`Plan`] for an external executor.
//!
//! - [`PlanFormat::Shell`]: a `set -e` shell script. Every operation is a
//!   `# label` comment followed by one command line, so a failing step stops
//!   the script and the comment above it names the step.
//! - [`PlanFormat::Json`]: the plan records as pretty-printed JSON.

use crate::error::{Error, Result};
use crate::git::{self, GitCommand};
use crate::plan::{Operation, Plan};
use std::fmt;
use std::str::FromStr;

/// Output format of a rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    Shell,
    Json,
}

impl FromStr for PlanFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" | "sh" => Ok(PlanFormat::Shell),
            "json" => Ok(PlanFormat::Json),
            other => Err(format!("unknown plan format '{}'", other)),
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanFormat::Shell => write!(f, "shell"),
            PlanFormat::Json => write!(f, "json"),
        }
    }
}

/// Render `plan` in `format`.
pub fn render(plan: &Plan, format: PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Shell => Ok(render_shell(plan)),
        PlanFormat::Json => render_json(plan),
    }
}

/// Render `plan` as a shell script.
pub fn render_shell(plan: &Plan) -> String {
    let mut out = format!("# Starting build {}\nset -e\n\n", plan.build_id);
    for op in &plan.operations {
        out.push_str(&format!("# {}\n{}\n\n", op.label(), shell_line(op)));
    }
    out
}

/// Render `plan` as pretty-printed JSON.
pub fn render_json(plan: &Plan) -> Result<String> {
    serde_json::to_string_pretty(plan).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })
}

fn shell_line(op: &Operation) -> String {
    let cmds = git::commands(op);
    let chain = cmds
        .iter()
        .map(shell_command)
        .collect::<Vec<_>>()
        .join(" && ");
    if cmds.iter().any(|c| c.at_toplevel) {
        format!("(cd \"$(git rev-parse --show-toplevel)\" && {})", chain)
    } else {
        chain
    }
}

fn shell_command(cmd: &GitCommand) -> String {
    let mut words: Vec<String> = cmd
        .env
        .iter()
        .map(|(key, value)| format!("{}={}", key, git::quote(value)))
        .collect();
    words.push("git".to_string());
    words.extend(cmd.args.iter().map(|arg| git::quote(arg)));
    let line = words.join(" ");
    if cmd.may_fail {
        format!("{{ {} 2>/dev/null || true; }}", line)
    } else {
        line
    }
}
