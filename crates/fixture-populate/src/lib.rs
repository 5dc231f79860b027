//! Provider fixture populator.
//!
//! Writes generated provider documents to the `provider-N/db.json` layout.
//!
//! # Example
//!
//! ```ignore
//! use fixture_generator::{FixtureGenerator, Provider};
//! use fixture_populate::FixturePopulator;
//!
//! let populator = FixturePopulator::new(FixtureGenerator::new(None), "providers");
//! let metrics = populator.populate_all(&Provider::ALL)?;
//! println!("Wrote {} files", metrics.len());
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{parse_timestamp, CommonFixtureArgs, GenerateArgs};
pub use error::PopulateError;
pub use populator::{persist, provider_path, FixturePopulator, PersistMetrics, FIXTURE_FILE_NAME};
