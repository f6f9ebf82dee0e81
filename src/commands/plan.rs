//! Plan command implementation
//!
//! Prints the operation plan for one build without touching any repository.
//! The shell format can be piped straight into `sh` from inside the target
//! repository.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use zataar::id::OsIdSource;
use zataar::manifest::{Manifest, DEFAULT_MANIFEST};
use zataar::mapping::{parse_mappings, PathMapping};
use zataar::namespace::{BranchNamespace, DEFAULT_PREFIX};
use zataar::plan::Plan;
use zataar::render::{render, PlanFormat};
use zataar::transform::Transformer;

/// Input branch used when neither `--input` nor `--source` is given.
const DEFAULT_INPUT: &str = "master";

/// Arguments describing one build, shared by `plan` and `run`
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Mappings of the form SOURCE[:DESTINATION]; later mappings win on
    /// overlapping paths. Without any, the whole tree is copied as is.
    #[arg(value_name = "MAPPING", conflicts_with = "source")]
    pub mappings: Vec<String>,

    /// Branch to transform [default: master, or upstream/<SOURCE> with --source]
    #[arg(short, long, value_name = "BRANCH")]
    pub input: Option<String>,

    /// Prefix of the branches created by the build
    #[arg(long, value_name = "PREFIX", env = "ZATAAR_NAMESPACE", default_value = DEFAULT_PREFIX)]
    pub namespace: String,

    /// Take the mappings from this manifest source
    #[arg(long, value_name = "NAME")]
    pub source: Option<String>,

    /// Upstream manifest used with --source
    #[arg(long, value_name = "PATH", env = "ZATAAR_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

impl BuildArgs {
    /// Resolve the input branch and mappings, reading the manifest if a
    /// source was named.
    pub fn resolve(&self) -> Result<(String, Vec<PathMapping>)> {
        match &self.source {
            Some(name) => {
                let manifest = Manifest::from_file(&self.manifest).with_context(|| {
                    format!("Failed to load manifest {}", self.manifest.display())
                })?;
                let source = manifest.source(name)?;
                let input = self
                    .input
                    .clone()
                    .unwrap_or_else(|| BranchNamespace::upstream(name));
                Ok((input, source.mappings()))
            }
            None => {
                let input = self
                    .input
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INPUT.to_string());
                Ok((input, parse_mappings(&self.mappings)))
            }
        }
    }

    /// Plan the build with a fresh build id.
    pub fn build_plan(&self) -> Result<Plan> {
        let namespace = BranchNamespace::new(self.namespace.as_str());
        let (input, mappings) = self.resolve()?;
        let plan = Transformer::new(namespace).plan(&input, mappings, &mut OsIdSource)?;
        Ok(plan)
    }
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Output format (shell, json)
    #[arg(long, value_name = "FORMAT", default_value = "shell")]
    pub format: PlanFormat,
}

/// Execute the plan command
pub fn execute(args: PlanArgs) -> Result<()> {
    let plan = args.build.build_plan()?;
    print!("{}", render(&plan, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn build_args(mappings: &[&str]) -> BuildArgs {
        BuildArgs {
            mappings: mappings.iter().map(|m| m.to_string()).collect(),
            input: None,
            namespace: DEFAULT_PREFIX.to_string(),
            source: None,
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let args = build_args(&[]);
        let (input, mappings) = args.resolve().unwrap();
        assert_eq!(input, "master");
        assert_eq!(mappings, vec![PathMapping::identity()]);
    }

    #[test]
    fn test_resolve_from_manifest_source() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("UPSTREAM");
        std::fs::write(
            &manifest,
            "[[source]]\nname = \"docs\"\nurl = \"u\"\nbranch = \"main\"\nmapping = [[\"site\", \"docs\"]]\n",
        )
        .unwrap();

        let mut args = build_args(&[]);
        args.source = Some("docs".to_string());
        args.manifest = manifest;

        let (input, mappings) = args.resolve().unwrap();
        assert_eq!(input, "upstream/docs");
        assert_eq!(mappings, vec![PathMapping::new("site", "docs")]);
    }

    #[test]
    fn test_resolve_missing_manifest() {
        let mut args = build_args(&[]);
        args.source = Some("docs".to_string());
        args.manifest = PathBuf::from("/nonexistent/UPSTREAM");
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Failed to load manifest"));
    }

    #[test]
    fn test_build_plan_uses_namespace() {
        let mut args = build_args(&["lib:vendor/lib"]);
        args.namespace = "meta".to_string();
        args.input = Some("main".to_string());
        let plan = args.build_plan().unwrap();
        assert!(plan.destination.starts_with("meta/"));
        assert_eq!(plan.input_branch, "main");
        assert_eq!(plan.operations.len(), 6);
    }
}
