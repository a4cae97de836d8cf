//! Build command handler

use anyhow::{Context, Result};

use bundlemap::presentation::{create_build_pipeline, render_build_report};

use super::RunOptions;

/// Execute the build command
pub fn cmd_build(options: &RunOptions, dry_run: bool) -> Result<()> {
    let mut ctx = options.context()?;
    let pipeline = create_build_pipeline(&ctx);

    let report = pipeline
        .run(&mut ctx, dry_run)
        .with_context(|| format!("build failed in {}", ctx.paths.project_root.display()))?;

    print!("{}", render_build_report(&report, &ctx.paths.output_root));
    Ok(())
}
