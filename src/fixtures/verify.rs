//! Fixture verify command handler.

use anyhow::Context;
use fixture_verify::{FixtureVerifier, VerificationReport, VerifyArgs};

/// Run the verify command. Fails if any file is unreadable or any report has violations.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<Vec<VerificationReport>> {
    let providers = args.common.selected_providers();
    let verifier = FixtureVerifier::new(&args.common.output_dir, args.common.item_count);

    let reports = verifier.verify_all(&providers).with_context(|| {
        format!(
            "Failed to verify provider fixtures under {:?}",
            args.common.output_dir
        )
    })?;

    let failed: Vec<&VerificationReport> = reports.iter().filter(|r| !r.is_success()).collect();
    if !failed.is_empty() {
        for report in &failed {
            for violation in &report.violations {
                tracing::error!("{} ({}): {}", report.provider, report.path.display(), violation);
            }
        }
        let total: usize = failed.iter().map(|r| r.violations.len()).sum();
        anyhow::bail!(
            "{} violations across {} provider fixture(s)",
            total,
            failed.len()
        );
    }

    Ok(reports)
}
