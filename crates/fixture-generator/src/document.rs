//! Serialized document shapes, one per provider.
//!
//! Field declaration order is the key order in the written JSON. Unknown keys are
//! rejected on read so the verifier catches schema drift.

use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Provider 1 document: `{metadata, catalog: {items}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Provider1Document {
    pub metadata: CatalogMetadata,
    pub catalog: Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogMetadata {
    pub provider: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub items: Vec<Provider1Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Provider1Item {
    pub product_id: String,
    pub product_name: String,
    pub product_desc: String,
    pub pricing: Pricing,
    pub stock: Stock,
    pub last_modified: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
    pub amount: f64,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stock {
    pub in_stock: bool,
    pub quantity: u32,
}

/// Provider 2 item. The document itself is a bare `Vec<Provider2Item>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Provider2Item {
    pub item_id: String,
    pub title: String,
    pub details: String,
    pub cost: f64,
    pub currency_type: String,
    pub is_available: bool,
    pub updated_at: String,
}

pub type Provider2Document = Vec<Provider2Item>;

/// Provider 3 document: `{success, count, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Provider3Document {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Provider3Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct Provider3Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub available: bool,
    pub last_update: String,
}

/// A generated document of any provider. Serializes as the inner shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderDocument {
    TechStore(Provider1Document),
    FlatCatalog(Provider2Document),
    WrappedFeed(Provider3Document),
}

impl ProviderDocument {
    pub fn provider(&self) -> Provider {
        match self {
            ProviderDocument::TechStore(_) => Provider::TechStore,
            ProviderDocument::FlatCatalog(_) => Provider::FlatCatalog,
            ProviderDocument::WrappedFeed(_) => Provider::WrappedFeed,
        }
    }

    /// Number of catalog items in the document.
    pub fn item_count(&self) -> usize {
        match self {
            ProviderDocument::TechStore(doc) => doc.catalog.items.len(),
            ProviderDocument::FlatCatalog(items) => items.len(),
            ProviderDocument::WrappedFeed(doc) => doc.data.len(),
        }
    }
}
