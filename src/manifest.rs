//! # Upstream Manifest
//!
//! The manifest (by default a file named `UPSTREAM` at the repository root)
//! declares the upstream sources a meta-repository is assembled from:
//!
//! ```toml
//! [[source]]
//! name = "docs"
//! owner = "alice"
//! url = "https://example.com/docs.git"
//! branch = "main"
//! mapping = [["site", "docs/site"], ["README.md", "docs"]]
//! ```
//!
//! Each source is fetched into `upstream/<name>` and then transformed with
//! its own mapping list, interpreted exactly like command-line mappings.

use crate::error::{Error, Result};
use crate::git::quote;
use crate::mapping::{identity_if_empty, PathMapping};
use crate::namespace::BranchNamespace;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "UPSTREAM";

/// All declared upstream sources, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "source", default)]
    pub sources: Vec<Source>,
}

/// One upstream repository and the part of the tree it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub branch: String,
    /// `["from", "to"]` pairs.
    #[serde(default)]
    pub mapping: Vec<[String; 2]>,
}

impl Source {
    /// The source's mappings, normalized; identity when none are declared.
    pub fn mappings(&self) -> Vec<PathMapping> {
        identity_if_empty(self.mapping.iter().map(PathMapping::from_pair).collect())
    }
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse the manifest at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Look up a named source.
    pub fn source(&self, name: &str) -> Result<&Source> {
        self.sources
            .iter()
            .find(|s| !s.name.is_empty() && s.name == name)
            .ok_or_else(|| Error::SourceNotFound {
                name: name.to_string(),
            })
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for source in self.sources.iter().filter(|s| !s.name.is_empty()) {
            if !seen.insert(source.name.as_str()) {
                return Err(Error::ManifestParse {
                    message: format!("source '{}' is declared more than once", source.name),
                    hint: Some("Each [[source]] needs a unique name".to_string()),
                });
            }
        }
        Ok(())
    }
}

/// One line of `fetch` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchLine {
    /// Fetch command for a named source.
    Fetch { name: String, command: String },
    /// A source without a name; it cannot get an upstream branch.
    SkippedUnnamed,
}

/// Fetch commands bringing every named source into `upstream/<name>`.
pub fn fetch_commands(manifest: &Manifest) -> Vec<FetchLine> {
    manifest
        .sources
        .iter()
        .map(|source| {
            if source.name.is_empty() {
                warn!("skipping unnamed source (url '{}')", source.url);
                return FetchLine::SkippedUnnamed;
            }
            let refspec = format!(
                "{}:refs/heads/{}",
                source.branch,
                BranchNamespace::upstream(&source.name)
            );
            FetchLine::Fetch {
                name: source.name.clone(),
                command: format!("git fetch {} {}", quote(&source.url), quote(&refspec)),
            }
        })
        .collect()
}
