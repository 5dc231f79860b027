//! Fixture generate command handler.

use anyhow::Context;
use fixture_generator::{FixtureGenerator, Provider};
use fixture_populate::{FixturePopulator, GenerateArgs, PersistMetrics};

/// First line of the completion summary.
pub const SUMMARY_HEADER: &str = "Generated provider data with different structures:";

/// Run the generate command: write each selected provider in order, stopping at the first failure.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<Vec<PersistMetrics>> {
    let providers = args.common.selected_providers();

    tracing::info!(
        "Writing {} provider fixtures under {:?}",
        providers.len(),
        args.common.output_dir
    );

    let generator = FixtureGenerator::new(args.seed)
        .with_item_count(args.common.item_count)
        .with_timestamp(args.timestamp.clone());
    let populator = FixturePopulator::new(generator, &args.common.output_dir)
        .with_create_dirs(args.create_dirs);

    let written = populator.populate_all(&providers).with_context(|| {
        format!(
            "Failed to write provider fixtures under {:?}",
            args.common.output_dir
        )
    })?;

    Ok(written)
}

/// Human readable completion summary: a header plus one line per provider.
pub fn summary_lines(providers: &[Provider]) -> Vec<String> {
    std::iter::once(SUMMARY_HEADER.to_string())
        .chain(
            providers
                .iter()
                .map(|provider| format!("  - {provider}: {}", provider.shape_summary())),
        )
        .collect()
}
