//! Mock provider catalog generator.
//!
//! Produces the same product set under three incompatible JSON schemas, one per
//! simulated upstream provider, for seeding a price aggregator's local fixtures.
//!
//! ```text
//! PRODUCT_TEMPLATES (20 entries)
//!        │  item i uses template i % 20
//!        ▼
//! ┌──────────────────────┐
//! │  FixtureGenerator    │
//! │  - seed (optional)   │
//! │  - item_count (50)   │
//! │  - timestamp         │
//! └──────────┬───────────┘
//!            │ generate(provider)
//!            ▼
//!   Provider1Document  { metadata, catalog: { items } }      snake_case
//!   Provider2Document  [ ... ]                                 camelCase
//!   Provider3Document  { success, count, data }                UPPERCASE
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::{FixtureGenerator, Provider};
//!
//! let generator = FixtureGenerator::new(Some(42));
//! let doc = generator.generate(Provider::WrappedFeed);
//! assert_eq!(doc.item_count(), 50);
//! ```

pub mod document;
pub mod generator;
pub mod generators;
pub mod provider;
pub mod templates;

pub use document::{
    Catalog, CatalogMetadata, Pricing, Provider1Document, Provider1Item, Provider2Document,
    Provider2Item, Provider3Document, Provider3Item, ProviderDocument, Stock,
};
pub use generator::{
    FixtureGenerator, DEFAULT_CURRENCY, DEFAULT_ITEM_COUNT, DEFAULT_TIMESTAMP, PROVIDER1_NAME,
    PROVIDER1_VERSION,
};
pub use provider::Provider;
pub use templates::{template_for, ProductTemplate, PRODUCT_TEMPLATES};
