//! Command handlers for the provider-fixtures CLI.

mod generate;
mod verify;

pub use generate::{run_generate, summary_lines, SUMMARY_HEADER};
pub use verify::run_verify;
