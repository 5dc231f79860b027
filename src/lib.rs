//! Provider Fixtures Library
//!
//! Seeds local fixture data for the product price aggregator: the same 50 products
//! written under three differently shaped provider schemas.
//!
//! # Layout
//!
//! ```text
//! providers/
//! ├── provider-1/db.json   { metadata, catalog: { items } }   nested, snake_case
//! ├── provider-2/db.json   [ ... ]                             flat, camelCase
//! └── provider-3/db.json   { success, count, data }            wrapped, UPPERCASE
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Write all three providers under ./providers with fresh random prices
//! provider-fixtures
//!
//! # Reproducible run into another directory, creating provider-N/ as needed
//! provider-fixtures generate -o /tmp/providers --seed 42 --create-dirs
//!
//! # Check written files against their schemas and price bounds
//! provider-fixtures verify -o /tmp/providers
//! ```

pub mod fixtures;

pub use fixture_generator as generator;
pub use fixture_populate as populate;
pub use fixture_verify as verify;
