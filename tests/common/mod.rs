//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_git_repo(&[("README.md", "hi\n")]);
//!     fixture.command().args(["plan"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{git, git_available, manifests, TestFixture};
}

/// Upstream manifest snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Two named sources and one unnamed source.
    pub const THREE_SOURCES: &str = r#"
[[source]]
name = "docs"
owner = "alice"
url = "https://example.com/docs.git"
branch = "main"
mapping = [["site", "docs/site"]]

[[source]]
url = "https://example.com/anonymous.git"
branch = "master"

[[source]]
name = "engine"
url = "https://example.com/engine.git"
branch = "release"
"#;

    /// Invalid TOML for error testing.
    pub const INVALID: &str = "[[source]\nname = ";
}

/// Whether a usable `git` binary is on the PATH.
///
/// Tests that drive a real repository return early when it is not.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking on failure, and return stdout.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A test fixture backed by a temporary directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add an `UPSTREAM` manifest with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("UPSTREAM", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Turn the directory into a git repository on branch `master` whose
    /// single commit contains `files`.
    pub fn with_git_repo(self, files: &[(&str, &str)]) -> Self {
        let dir = self.path().to_path_buf();
        git(&dir, &["init", "-q"]);
        git(&dir, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        git(&dir, &["config", "user.name", "Test User"]);
        git(&dir, &["config", "user.email", "test@example.com"]);
        git(&dir, &["config", "commit.gpgsign", "false"]);
        let fixture = files
            .iter()
            .fold(self, |fixture, (path, content)| fixture.with_file(path, content));
        git(&dir, &["add", "-A"]);
        git(&dir, &["commit", "-q", "-m", "initial"]);
        fixture
    }

    /// Contents of `path` on `branch`.
    pub fn show(&self, branch: &str, path: &str) -> String {
        let object = format!("{}:{}", branch, path);
        git(self.path(), &["show", object.as_str()])
    }

    /// All file paths on `branch`, sorted.
    pub fn files(&self, branch: &str) -> Vec<String> {
        let mut files: Vec<String> = git(self.path(), &["ls-tree", "-r", "--name-only", branch])
            .lines()
            .map(str::to_string)
            .collect();
        files.sort();
        files
    }

    /// Whether a local branch exists.
    pub fn has_branch(&self, branch: &str) -> bool {
        !git(self.path(), &["branch", "--list", branch]).trim().is_empty()
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command for the zataar binary running in this directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zataar");
        cmd.current_dir(self.path())
            .env_remove("ZATAAR_NAMESPACE")
            .env_remove("ZATAAR_MANIFEST")
            .env_remove("ZATAAR_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
