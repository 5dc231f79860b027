//! CLI argument definitions for fixture verification.

use clap::Args;
use fixture_populate::CommonFixtureArgs;

/// Arguments for the verify command.
#[derive(Args, Clone, Debug, Default)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub common: CommonFixtureArgs,
}
