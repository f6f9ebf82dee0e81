//! # Path Mappings
//!
//! A mapping is a `source[:destination]` rule: the source path selects the
//! subtree to isolate and the destination path says where to put it in the
//! assembled tree.
//!
//! Two policies live here:
//!
//! - **Identity if empty**: a build with no mappings gets exactly one
//!   mapping `("/", "/")`, which copies everything and relocates nothing.
//! - **Best-effort parsing**: a malformed mapping is never rejected. Both
//!   halves are cleaned with [`clean_path`] and passed on; a path that does
//!   not exist is only detected when the plan is executed.

use crate::path::{clean_path, is_root, ROOT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `(from, to)` rule, already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMapping {
    /// Subtree to extract; `/` means the entire tree.
    pub from: String,
    /// Where to nest the extracted tree; empty or `/` means the root.
    pub to: String,
}

impl PathMapping {
    /// Build a mapping from raw halves, cleaning both.
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: clean_path(from),
            to: clean_path(to),
        }
    }

    /// The identity mapping used when no mapping is supplied.
    pub fn identity() -> Self {
        Self {
            from: ROOT.to_string(),
            to: ROOT.to_string(),
        }
    }

    /// Parse `path` or `path:path`, splitting at the first colon only.
    ///
    /// Without a colon the destination is empty: the subtree lands at the
    /// root of the destination.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((from, to)) => Self::new(from, to),
            None => Self::new(raw, ""),
        }
    }

    /// Build a mapping from a manifest `["from", "to"]` pair.
    pub fn from_pair(pair: &[String; 2]) -> Self {
        Self::new(&pair[0], &pair[1])
    }

    /// Whether the source path selects less than the whole tree.
    pub fn needs_isolation(&self) -> bool {
        !is_root(&self.from)
    }

    /// Whether the extracted tree must be nested under a directory.
    pub fn needs_relocation(&self) -> bool {
        !is_root(&self.to)
    }
}

impl fmt::Display for PathMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}

/// Substitute the identity mapping for an empty mapping list.
pub fn identity_if_empty(mappings: Vec<PathMapping>) -> Vec<PathMapping> {
    if mappings.is_empty() {
        vec![PathMapping::identity()]
    } else {
        mappings
    }
}

/// Parse raw mapping strings in order.
///
/// The result has one entry per input, or the identity mapping alone when
/// the input is empty.
pub fn parse_mappings<I, S>(raws: I) -> Vec<PathMapping>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    identity_if_empty(
        raws.into_iter()
            .map(|raw| PathMapping::parse(raw.as_ref()))
            .collect(),
    )
}
