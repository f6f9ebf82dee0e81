//! # Operation Plan
//!
//! The planner does not run anything. It produces a [`Plan`]: an ordered
//! list of [`Operation`] records with typed fields. Renderers in
//! [`crate::render`] turn a plan into text, and executors in
//! [`crate::executor`] apply it to a repository.

use serde::{Deserialize, Serialize};

/// One step of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Force `target` to point at `source`, replacing any existing branch.
    DuplicateBranch { source: String, target: String },

    /// Rewrite `branch` so that only the subtree at `path` remains, rooted
    /// at the top of the tree ("zoom in").
    IsolatePath { branch: String, path: String },

    /// Rewrite `branch` so that its whole tree is nested under `path`
    /// ("zoom out"). Entries are first moved into the hidden `.<staging>`
    /// directory so they cannot collide with `path` itself.
    RelocatePath {
        branch: String,
        path: String,
        staging: String,
    },

    /// Layer `top` over `bottom`: on overlapping paths `top` wins, and the
    /// result ends up on `bottom`.
    MergeLayer { bottom: String, top: String },
}

impl Operation {
    /// Short label naming the logical step, used in comments and errors.
    pub fn label(&self) -> String {
        match self {
            Operation::DuplicateBranch { source, target } => {
                format!("dupBranch({}, {})", source, target)
            }
            Operation::IsolatePath { branch, path } => format!("zoomIn({}, {})", branch, path),
            Operation::RelocatePath { branch, path, .. } => {
                format!("zoomOut({}, {})", branch, path)
            }
            Operation::MergeLayer { bottom, top } => format!("mergeLayer({}, {})", bottom, top),
        }
    }
}

/// The full, replayable plan of one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub build_id: String,
    pub input_branch: String,
    /// Branch holding the result once every operation has run.
    pub destination: String,
    pub operations: Vec<Operation>,
}

impl Plan {
    /// Operations that merge a layer into the destination, in order.
    pub fn merges(&self) -> impl Iterator<Item = &Operation> {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::MergeLayer { .. }))
    }
}
