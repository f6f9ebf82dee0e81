//! # Terminal Output
//!
//! Status lines printed by the `run` and `fetch` commands. Rendered plans
//! are never decorated; they must stay valid shell or JSON.
//!
//! Colors and symbols follow `--color` and the usual environment variables:
//! `NO_COLOR` (any value) and `CLICOLOR=0` disable them, `CLICOLOR_FORCE=1`
//! forces them outside a TTY, and `TERM=dumb` disables them.

use console::style;
use std::env;
use std::str::FromStr;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            other => Err(format!("invalid color choice '{}'", other)),
        }
    }
}

/// Kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
    Info,
    Skipped,
}

/// Whether output may use colors and symbols.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stderr().features().colors_supported()
    }

    /// Format `message` as a status line.
    pub fn status(&self, status: Status, message: &str) -> String {
        if !self.use_color {
            let tag = match status {
                Status::Ok => "[OK]",
                Status::Failed => "[ERR]",
                Status::Info => "[INFO]",
                Status::Skipped => "[SKIP]",
            };
            return format!("{} {}", tag, message);
        }
        let symbol = match status {
            Status::Ok => style("✅").green(),
            Status::Failed => style("❌").red(),
            Status::Info => style("🔍").cyan(),
            Status::Skipped => style("⏭").yellow(),
        };
        format!("{} {}", symbol.force_styling(true), message)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}
