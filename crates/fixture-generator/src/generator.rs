//! Main fixture generator producing one document per provider.

use crate::document::{
    Catalog, CatalogMetadata, Pricing, Provider1Document, Provider1Item, Provider2Document,
    Provider2Item, Provider3Document, Provider3Item, ProviderDocument, Stock,
};
use crate::generators::{numeric, pattern};
use crate::provider::Provider;
use crate::templates::template_for;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Number of items per provider document.
pub const DEFAULT_ITEM_COUNT: usize = 50;

/// Timestamp stamped on every item and on the provider 1 metadata.
pub const DEFAULT_TIMESTAMP: &str = "2025-09-30T10:30:00Z";

pub const DEFAULT_CURRENCY: &str = "USD";

pub const PROVIDER1_NAME: &str = "TechStore API";
pub const PROVIDER1_VERSION: &str = "2.0";

/// Generator for the three provider catalogs.
///
/// Without a seed every call draws from fresh entropy, so two runs differ in
/// prices and availability but never in ids, names, or descriptions. With a seed
/// each provider draws from its own stream, so a provider's document does not
/// depend on which other providers were generated.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    seed: Option<u64>,
    item_count: usize,
    timestamp: String,
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FixtureGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            item_count: DEFAULT_ITEM_COUNT,
            timestamp: DEFAULT_TIMESTAMP.to_string(),
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// RNG stream for one provider.
    fn rng_for(&self, provider: Provider) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(
                seed.wrapping_add(u64::from(provider.index()).wrapping_mul(0x9E3779B97F4A7C15)),
            ),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate the document for `provider`.
    pub fn generate(&self, provider: Provider) -> ProviderDocument {
        debug!(
            "Generating {} items for {} (seed={:?})",
            self.item_count, provider, self.seed
        );
        match provider {
            Provider::TechStore => ProviderDocument::TechStore(self.generate_provider1()),
            Provider::FlatCatalog => ProviderDocument::FlatCatalog(self.generate_provider2()),
            Provider::WrappedFeed => ProviderDocument::WrappedFeed(self.generate_provider3()),
        }
    }

    /// Nested snake_case catalog.
    pub fn generate_provider1(&self) -> Provider1Document {
        let provider = Provider::TechStore;
        let mut rng = self.rng_for(provider);

        let items = (0..self.item_count)
            .map(|i| {
                let template = template_for(i);
                Provider1Item {
                    product_id: pattern::product_id(provider.index(), i),
                    product_name: pattern::suffixed_name(
                        template.name,
                        &provider.name_suffixes(),
                        i,
                    ),
                    product_desc: template.description.to_string(),
                    pricing: Pricing {
                        amount: numeric::perturb_price(
                            &mut rng,
                            template.base_price,
                            provider.price_range(),
                        ),
                        currency_code: DEFAULT_CURRENCY.to_string(),
                    },
                    stock: Stock {
                        in_stock: numeric::weighted_availability(&mut rng),
                        quantity: numeric::stock_quantity(&mut rng),
                    },
                    last_modified: self.timestamp.clone(),
                }
            })
            .collect();

        Provider1Document {
            metadata: CatalogMetadata {
                provider: PROVIDER1_NAME.to_string(),
                version: PROVIDER1_VERSION.to_string(),
                timestamp: self.timestamp.clone(),
            },
            catalog: Catalog { items },
        }
    }

    /// Flat camelCase array.
    pub fn generate_provider2(&self) -> Provider2Document {
        let provider = Provider::FlatCatalog;
        let mut rng = self.rng_for(provider);

        (0..self.item_count)
            .map(|i| {
                let template = template_for(i);
                Provider2Item {
                    item_id: pattern::product_id(provider.index(), i),
                    title: pattern::suffixed_name(template.name, &provider.name_suffixes(), i),
                    details: template.description.to_string(),
                    cost: numeric::perturb_price(
                        &mut rng,
                        template.base_price,
                        provider.price_range(),
                    ),
                    currency_type: DEFAULT_CURRENCY.to_string(),
                    is_available: numeric::weighted_availability(&mut rng),
                    updated_at: self.timestamp.clone(),
                }
            })
            .collect()
    }

    /// UPPERCASE keys inside a `success`/`count`/`data` wrapper.
    pub fn generate_provider3(&self) -> Provider3Document {
        let provider = Provider::WrappedFeed;
        let mut rng = self.rng_for(provider);

        let data: Vec<Provider3Item> = (0..self.item_count)
            .map(|i| {
                let template = template_for(i);
                Provider3Item {
                    id: pattern::product_id(provider.index(), i),
                    name: pattern::suffixed_name(template.name, &provider.name_suffixes(), i),
                    description: template.description.to_string(),
                    price: numeric::perturb_price(
                        &mut rng,
                        template.base_price,
                        provider.price_range(),
                    ),
                    currency: DEFAULT_CURRENCY.to_string(),
                    available: numeric::weighted_availability(&mut rng),
                    last_update: self.timestamp.clone(),
                }
            })
            .collect();

        Provider3Document {
            success: true,
            count: data.len(),
            data,
        }
    }
}
