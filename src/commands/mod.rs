//! Command handlers
//!
//! Shared setup for every command: resolve configuration with CLI overrides
//! and build the run context.

pub mod build;
pub mod reconcile;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use bundlemap::application::BuildContext;
use bundlemap::config::{self, Config};

use crate::cli::Cli;

/// Global options shared by all commands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub project: PathBuf,
    pub config: Option<PathBuf>,
    pub platform: Option<String>,
    pub build_version: Option<String>,
    pub append_hash: bool,
}

impl RunOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            project: cli.project.clone(),
            config: cli.config.clone(),
            platform: cli.platform.clone(),
            build_version: cli.build_version.clone(),
            append_hash: cli.append_hash,
        }
    }

    /// File (or defaults), then `BUNDLEMAP_*` env, then CLI flags
    pub fn load_config(&self) -> Result<Config> {
        let (config, warnings) = match &self.config {
            Some(path) => {
                let (config, warnings) = config::load_with_warnings(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                (config::with_env_overrides(config), warnings)
            }
            None => config::load_or_default(&self.project).with_context(|| {
                format!("failed to load config from {}", self.project.display())
            })?,
        };

        for warning in &warnings {
            warn!("{}", warning);
        }
        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(platform) = &self.platform {
            config.build.platform = platform.clone();
        }
        if let Some(version) = &self.build_version {
            config.build.version = version.clone();
        }
        if self.append_hash {
            config.build.append_hash = true;
        }
        config
    }

    pub fn context(&self) -> Result<BuildContext> {
        let config = self.load_config()?;
        Ok(BuildContext::from_config(&config, &self.project))
    }
}
