//! Branch naming for builds.
//!
//! Every branch a build creates lives under `<prefix>/<build id>/`, so
//! concurrent builds in one repository never touch each other's branches:
//!
//! ```text
//! zataar/<id>/dst        accumulated output of the build
//! zataar/<id>/base       untouched copy of the input branch
//! zataar/<id>/map/<n>    scratch branch for mapping n
//! ```

/// Default branch prefix.
pub const DEFAULT_PREFIX: &str = "zataar";

/// Prefix of the branches manifest sources are fetched into.
pub const UPSTREAM_PREFIX: &str = "upstream";

/// Pure naming functions for one branch prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchNamespace {
    prefix: String,
}

impl BranchNamespace {
    /// Create a namespace rooted at `prefix`. Surrounding slashes are trimmed.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_matches('/');
        Self {
            prefix: if trimmed.is_empty() {
                DEFAULT_PREFIX.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Branch accumulating the merged layers of a build.
    pub fn destination(&self, build_id: &str) -> String {
        format!("{}/{}/dst", self.prefix, build_id)
    }

    /// Unmodified copy of the input branch; every map branch starts here.
    pub fn base(&self, build_id: &str) -> String {
        format!("{}/{}/base", self.prefix, build_id)
    }

    /// Scratch branch for the mapping at `index`.
    pub fn map_branch(&self, build_id: &str, index: usize) -> String {
        format!("{}/{}/map/{}", self.prefix, build_id, index)
    }

    /// Local branch a manifest source is fetched into.
    pub fn upstream(source: &str) -> String {
        format!("{}/{}", UPSTREAM_PREFIX, source)
    }
}

impl Default for BranchNamespace {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
