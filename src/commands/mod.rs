//! # CLI Command Implementations
//!
//! One module per `zataar` subcommand. Each module has an `Args` struct
//! derived with `clap` and an `execute` function that calls into the
//! `zataar` library.
//!
//! - `plan`: print the operation plan of a build.
//! - `run`: plan a build and execute it in a local repository.
//! - `fetch`: print fetch commands for the upstream manifest.
//! - `completions`: shell completion scripts.

pub mod completions;
pub mod fetch;
pub mod plan;
pub mod run;
