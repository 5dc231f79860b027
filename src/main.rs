//! Command-line interface for provider-fixtures
//!
//! # Usage Examples
//!
//! ```bash
//! # Default run: all providers, 50 items each, under ./providers
//! provider-fixtures
//!
//! # Only providers 1 and 3, reproducible, custom timestamp
//! provider-fixtures generate --providers 1,3 --seed 7 \
//!   --timestamp 2026-01-01T00:00:00Z
//!
//! # Verify what was written
//! provider-fixtures verify --output-dir providers
//! ```

use clap::{Parser, Subcommand};
use fixture_populate::GenerateArgs;
use fixture_verify::VerifyArgs;
use provider_fixtures::fixtures::{run_generate, run_verify, summary_lines};

#[derive(Parser)]
#[command(name = "provider-fixtures")]
#[command(about = "Generate mock provider catalog fixtures with three different JSON schemas")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Generate options used when no subcommand is given
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate provider-N/db.json for each provider (default)
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Read provider fixtures back and check their schema and value bounds
    Verify {
        #[command(flatten)]
        args: VerifyArgs,
    },
}

impl Cli {
    /// The selected command; no subcommand means generate with the top-level options.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Generate {
            args: self.generate,
        })
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Generate { args } => {
            let written = run_generate(&args)?;
            let providers: Vec<_> = written.iter().map(|m| m.provider).collect();
            for line in summary_lines(&providers) {
                println!("{line}");
            }
        }
        Commands::Verify { args } => {
            let reports = run_verify(&args)?;
            for report in reports {
                tracing::info!(
                    "{}: {} items OK in {:?}",
                    report.provider,
                    report.items_checked,
                    report.path
                );
            }
        }
    }

    Ok(())
}
