//! Isolated project directory with a build context and helpers to run
//! the library pipeline or the `bundlemap` binary against it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use bundlemap::config::Config;
use bundlemap::presentation::factory::create_build_pipeline;
use bundlemap::{BuildContext, BuildReport};

pub const PLATFORM: &str = "Android";

/// Result of running the `bundlemap` binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let project = Self::new();
        for (rel, content) in files {
            project.write(rel, content);
        }
        project
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap_or_default()
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.build.platform = PLATFORM.to_string();
        config
    }

    pub fn context(&self) -> BuildContext {
        BuildContext::from_config(&self.config(), self.root.path())
    }

    /// Path of a produced artifact relative to the platform output root
    pub fn output(&self, relative: &str) -> PathBuf {
        self.context().paths.output_root.join(relative)
    }

    /// Run the library pipeline with the production wiring
    pub fn build(&self, ctx: &mut BuildContext, dry_run: bool) -> BuildReport {
        create_build_pipeline(ctx)
            .run(ctx, dry_run)
            .expect("build failed")
    }

    pub fn asset_manifest(&self) -> serde_json::Value {
        read_json(&self.context().paths.asset_manifest)
    }

    pub fn resource_manifest(&self) -> serde_json::Value {
        read_json(&self.context().paths.resource_manifest)
    }

    /// Run the `bundlemap` binary with `--project` pointing here
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_bundlemap"))
            .arg("--project")
            .arg(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("BUNDLEMAP_PLATFORM")
            .env_remove("BUNDLEMAP_VERSION")
            .env_remove("BUNDLEMAP_APPEND_HASH")
            .output()
            .expect("Failed to execute bundlemap");

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    serde_json::from_str(&content).unwrap()
}
