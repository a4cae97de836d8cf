//! Reconcile command handler
//!
//! Runs the dry pass (to learn legacy identifiers) and then removes stale
//! artifacts, without bundling or touching the manifests.

use anyhow::{Context, Result};

use bundlemap::presentation::{create_build_pipeline, render_reconcile_report};

use super::RunOptions;

/// Execute the reconcile command
pub fn cmd_reconcile(options: &RunOptions) -> Result<()> {
    let mut ctx = options.context()?;
    let pipeline = create_build_pipeline(&ctx);

    let report = pipeline
        .reconcile_only(&mut ctx)
        .with_context(|| format!("reconcile failed in {}", ctx.paths.output_root.display()))?;

    if let Some(result) = &report.reconcile {
        print!("{}", render_reconcile_report(result));
    }
    Ok(())
}
