//! Output Rendering
//!
//! Turns run reports into the text the CLI prints.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::{BuildReport, ReconcileResult};

/// Render the summary of a build (or dry run)
pub fn render_build_report(report: &BuildReport, output_root: &Path) -> String {
    let mut out = String::new();

    if report.dry_run {
        let _ = writeln!(out, "Dry run: {} identifiers assigned", report.assignments);
    } else {
        let _ = writeln!(
            out,
            "Built {} artifacts into {}",
            report.assignments,
            output_root.display()
        );
        let _ = writeln!(
            out,
            "Manifests: {} assets, {} resources",
            report.asset_entries, report.resource_entries
        );
    }

    if report.discrepancies > 0 {
        let _ = writeln!(
            out,
            "{} legacy identifiers kept (source path changed since first assignment)",
            report.discrepancies
        );
    }

    for collision in &report.collisions {
        let _ = writeln!(
            out,
            "✗ duplicate name '{}' at {} renamed to '{}'",
            collision.name, collision.path, collision.renamed_to
        );
    }

    if let Some(reconciled) = &report.reconcile {
        out.push_str(&render_reconcile_report(reconciled));
    }

    out
}

/// Render what reconciliation removed, kept and failed to remove
pub fn render_reconcile_report(result: &ReconcileResult) -> String {
    let mut out = String::new();

    for path in &result.deleted {
        let _ = writeln!(out, "- removed {}", path.display());
    }
    for key in &result.kept_by_discrepancy {
        let _ = writeln!(out, "○ kept {} (legacy identifier)", key);
    }
    for failure in &result.failures {
        let _ = writeln!(
            out,
            "✗ could not remove {}: {}",
            failure.path.display(),
            failure.message
        );
    }

    let _ = writeln!(
        out,
        "Reconciled: {} removed, {} kept, {} failed",
        result.deleted.len(),
        result.kept_by_discrepancy.len(),
        result.failures.len()
    );
    out
}
