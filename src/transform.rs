//! # Transform Orchestrator
//!
//! Turns an input branch and an ordered list of mappings into a [`Plan`].
//!
//! For a build `id` the plan always has the same shape:
//!
//! 1. duplicate the input branch into the destination and base branches;
//! 2. for each mapping `n`, in order:
//!    - duplicate base into map branch `n`;
//!    - isolate `from` on it, unless `from` is the root;
//!    - relocate it under `to`, unless `to` is the root;
//!    - merge map branch `n` as the top layer into the destination.
//!
//! Merges are emitted strictly in mapping order, so mapping `n` overrides
//! mapping `n - 1` where their paths overlap and never the reverse.
//!
//! Planning does not look at the repository. A mapping whose source path
//! does not exist still yields a plan; the failure surfaces when the
//! isolation step is executed.

use crate::error::Result;
use crate::id::{IdSource, BUILD_ID_LEN, STAGING_ID_LEN};
use crate::mapping::{identity_if_empty, PathMapping};
use crate::namespace::BranchNamespace;
use crate::plan::{Operation, Plan};
use log::{debug, info};

/// Plans builds within one branch namespace.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    namespace: BranchNamespace,
}

impl Transformer {
    pub fn new(namespace: BranchNamespace) -> Self {
        Self { namespace }
    }

    pub fn namespace(&self) -> &BranchNamespace {
        &self.namespace
    }

    /// Plan one build of `input_branch` through `mappings`.
    ///
    /// An empty mapping list is replaced by the identity mapping. Fails only
    /// if `ids` cannot produce an identifier.
    pub fn plan(
        &self,
        input_branch: &str,
        mappings: Vec<PathMapping>,
        ids: &mut dyn IdSource,
    ) -> Result<Plan> {
        let build_id = ids.next_id(BUILD_ID_LEN)?;
        let mappings = identity_if_empty(mappings);
        info!(
            "Planning build {} of '{}' with {} mapping(s)",
            build_id,
            input_branch,
            mappings.len()
        );

        let destination = self.namespace.destination(&build_id);
        let base = self.namespace.base(&build_id);
        let mut operations = vec![
            duplicate(input_branch, &destination),
            duplicate(input_branch, &base),
        ];

        for (index, mapping) in mappings.iter().enumerate() {
            let map_branch = self.namespace.map_branch(&build_id, index);
            debug!("mapping {} ({}) -> {}", index, mapping, map_branch);

            operations.push(duplicate(&base, &map_branch));

            if mapping.needs_isolation() {
                operations.push(Operation::IsolatePath {
                    branch: map_branch.clone(),
                    path: mapping.from.clone(),
                });
            } else {
                debug!("mapping {}: source is the root, skipping isolation", index);
            }

            if mapping.needs_relocation() {
                operations.push(Operation::RelocatePath {
                    branch: map_branch.clone(),
                    path: mapping.to.clone(),
                    staging: ids.next_id(STAGING_ID_LEN)?,
                });
            } else {
                debug!("mapping {}: destination is the root, skipping relocation", index);
            }

            operations.push(Operation::MergeLayer {
                bottom: destination.clone(),
                top: map_branch,
            });
        }

        Ok(Plan {
            build_id,
            input_branch: input_branch.to_string(),
            destination,
            operations,
        })
    }
}

fn duplicate(source: &str, target: &str) -> Operation {
    Operation::DuplicateBranch {
        source: source.to_string(),
        target: target.to_string(),
    }
}
