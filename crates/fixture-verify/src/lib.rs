//! Verifier for written provider fixtures.
//!
//! Reads each `provider-N/db.json` back into its typed document and checks that it
//! still matches what the generator promises: item count, sequential ids, cycled
//! template names and descriptions, price bounds, and a single shared timestamp.
//!
//! # Example
//!
//! ```ignore
//! use fixture_verify::FixtureVerifier;
//! use fixture_generator::Provider;
//!
//! let verifier = FixtureVerifier::new("providers", 50);
//! let report = verifier.verify(Provider::FlatCatalog)?;
//! assert!(report.is_success());
//! ```

pub mod args;
pub mod check;
pub mod error;
pub mod report;
pub mod verifier;

pub use args::VerifyArgs;
pub use error::VerifyError;
pub use report::{VerificationReport, Violation};
pub use verifier::FixtureVerifier;
