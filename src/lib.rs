//! # zataar
//!
//! Assembles one branch of a meta-repository out of another branch and a
//! list of path mappings. Each mapping isolates a subtree, relocates it and
//! layers it over the previous mappings; later mappings win where paths
//! overlap. It is the primitive an auto-pull system runs once per upstream
//! source.
//!
//! ## Quick Example
//!
//! ```
//! use zataar::id::OsIdSource;
//! use zataar::mapping::parse_mappings;
//! use zataar::render::render_shell;
//! use zataar::transform::Transformer;
//!
//! let mappings = parse_mappings(["lib/a:vendor/a"]);
//! let plan = Transformer::default()
//!     .plan("master", mappings, &mut OsIdSource)
//!     .unwrap();
//!
//! // duplicate dst, duplicate base, duplicate map, isolate, relocate, merge
//! assert_eq!(plan.operations.len(), 6);
//! assert!(render_shell(&plan).contains("--subdirectory-filter lib/a"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Mappings (`mapping`, `path`)**: `source[:destination]` rules,
//!   normalized best-effort, with the identity mapping as the default.
//! - **Branch namespace (`namespace`)**: per-build branch names, so builds
//!   can share a repository.
//! - **Plans (`plan`, `transform`)**: the orchestrator emits an ordered list
//!   of typed operations instead of running anything.
//! - **Rendering and execution (`render`, `git`, `executor`)**: a plan is
//!   printed as a shell script or JSON, or executed with the system `git`.
//! - **Manifest (`manifest`)**: TOML declaration of upstream sources and
//!   their mappings.
//!
//! ## Execution Flow
//!
//! 1. **Init**: draw a build id, normalize the mappings.
//! 2. **Duplicate base**: copy the input branch to the destination and base
//!    branches.
//! 3. **Per mapping**: copy base to a scratch branch, isolate, relocate,
//!    merge it as a layer into the destination.
//!
//! Planning never touches the repository. Path errors show up when the
//! plan runs, and abort the build at that step.

pub mod error;
pub mod executor;
pub mod git;
pub mod id;
pub mod manifest;
pub mod mapping;
pub mod namespace;
pub mod output;
pub mod path;
pub mod plan;
pub mod render;
pub mod transform;

#[cfg(test)]
mod mapping_proptest;
