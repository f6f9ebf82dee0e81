//! # Error Handling
//!
//! This module defines the centralized error type for the `zataar` library.
//! It uses `thiserror` to describe every failure mode the planner, the
//! executor and the manifest loader can hit, with enough context to tell the
//! user which build step went wrong.
//!
//! The taxonomy follows the three places a build can fail:
//!
//! - **Environment**: the entropy source could not produce an identifier.
//!   This is fatal; a build never proceeds with a predictable id.
//! - **Configuration**: the upstream manifest could not be read or parsed, or
//!   a named source does not exist. Malformed mapping strings are *not*
//!   errors, they are normalized best-effort.
//! - **Execution**: a git command run by the executor failed (missing path,
//!   unresolvable merge). The whole build is aborted at that step.

use thiserror::Error;

/// Main error type for zataar operations
#[derive(Error, Debug)]
pub enum Error {
    /// The operating system could not supply randomness for an identifier.
    #[error("Entropy source unavailable: {message}")]
    Entropy { message: String },

    /// The upstream manifest could not be parsed.
    #[error("Manifest parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ManifestParse {
        message: String,
        /// Optional hint for how to fix the manifest
        hint: Option<String>,
    },

    /// A source requested by name is not declared in the manifest.
    #[error("Source not found in manifest: {name}")]
    SourceNotFound { name: String },

    /// A plan step failed when executed against a repository.
    ///
    /// `step` is the logical label of the operation (e.g. `zoomIn(b, lib)`)
    /// and `command` the git invocation that exited non-zero.
    #[error("Build step {step} failed: {command} - {stderr}")]
    Step {
        step: String,
        command: String,
        stderr: String,
    },

    /// The `git` binary could not be started at all.
    #[error("Failed to run {command}: {message}")]
    GitSpawn { command: String, message: String },

    /// An error occurred during serialization.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
