//! CLI argument definitions for fixture generation.

use clap::Args;
use fixture_generator::{Provider, DEFAULT_ITEM_COUNT, DEFAULT_TIMESTAMP};
use std::path::PathBuf;

/// Arguments shared by the generate and verify commands.
#[derive(Args, Clone, Debug)]
pub struct CommonFixtureArgs {
    /// Root directory holding the provider-N/db.json files
    #[arg(
        long,
        short = 'o',
        default_value = "providers",
        env = "PROVIDER_FIXTURES_DIR"
    )]
    pub output_dir: PathBuf,

    /// Providers to process (comma-separated: 1,2,3 or provider-N; empty = all, in order)
    #[arg(long, value_delimiter = ',')]
    pub providers: Vec<Provider>,

    /// Number of items per provider document
    #[arg(long, default_value_t = DEFAULT_ITEM_COUNT)]
    pub item_count: usize,
}

impl Default for CommonFixtureArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("providers"),
            providers: Vec::new(),
            item_count: DEFAULT_ITEM_COUNT,
        }
    }
}

impl CommonFixtureArgs {
    /// Requested providers, deduplicated and in provider order.
    pub fn selected_providers(&self) -> Vec<Provider> {
        if self.providers.is_empty() {
            return Provider::ALL.to_vec();
        }
        let mut providers = self.providers.clone();
        providers.sort();
        providers.dedup();
        providers
    }
}

/// Arguments for the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonFixtureArgs,

    /// Random seed for reproducible prices and availability (unset = fresh entropy each run)
    #[arg(long, env = "PROVIDER_FIXTURES_SEED")]
    pub seed: Option<u64>,

    /// RFC 3339 timestamp stamped on every item
    #[arg(long, default_value = DEFAULT_TIMESTAMP, value_parser = parse_timestamp)]
    pub timestamp: String,

    /// Create missing provider-N directories instead of failing
    #[arg(long)]
    pub create_dirs: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            common: CommonFixtureArgs::default(),
            seed: None,
            timestamp: DEFAULT_TIMESTAMP.to_string(),
            create_dirs: false,
        }
    }
}

/// Accept only RFC 3339 timestamps, returned unchanged.
pub fn parse_timestamp(value: &str) -> Result<String, String> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid RFC 3339 timestamp '{value}': {e}"))
}
