//! Provider descriptors: what differs between the three simulated upstream APIs.

use std::fmt;
use std::str::FromStr;

/// One of the three simulated upstream providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    /// Provider 1: nested document with snake_case keys.
    TechStore,
    /// Provider 2: bare array with camelCase keys.
    FlatCatalog,
    /// Provider 3: `success`/`count`/`data` wrapper with UPPERCASE keys.
    WrappedFeed,
}

impl Provider {
    /// All providers in the order they are generated and written.
    pub const ALL: [Provider; 3] = [
        Provider::TechStore,
        Provider::FlatCatalog,
        Provider::WrappedFeed,
    ];

    /// 1-based provider number, used in ids and directory names.
    pub fn index(self) -> u8 {
        match self {
            Provider::TechStore => 1,
            Provider::FlatCatalog => 2,
            Provider::WrappedFeed => 3,
        }
    }

    /// Name suffix rotation, indexed by `item % 5`.
    pub fn name_suffixes(self) -> [&'static str; 5] {
        match self {
            Provider::TechStore => ["Pro", "Elite", "Premium", "Ultra", ""],
            Provider::FlatCatalog => ["Plus", "Max", "Deluxe", "Standard", ""],
            Provider::WrappedFeed => ["Advanced", "Limited", "Edition", "Special", ""],
        }
    }

    /// Inclusive multiplier range applied to template base prices.
    pub fn price_range(self) -> (f64, f64) {
        match self {
            Provider::TechStore => (0.9, 1.1),
            Provider::FlatCatalog => (0.85, 1.15),
            Provider::WrappedFeed => (0.95, 1.05),
        }
    }

    /// Directory name under the output root, e.g. `provider-2`.
    pub fn dir_name(self) -> String {
        format!("provider-{}", self.index())
    }

    /// Human readable description of the document shape.
    pub fn shape_summary(self) -> &'static str {
        match self {
            Provider::TechStore => "Nested structure with snake_case (metadata.catalog.items)",
            Provider::FlatCatalog => "Flat array with camelCase",
            Provider::WrappedFeed => "Wrapper with UPPERCASE keys (success.count.data)",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provider {}", self.index())
    }
}

impl FromStr for Provider {
    type Err = String;

    /// Accepts `1`, `provider-1`, `provider1` (case-insensitive), and likewise for 2 and 3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized
            .strip_prefix("provider-")
            .or_else(|| normalized.strip_prefix("provider"))
            .unwrap_or(&normalized);
        match digits {
            "1" => Ok(Provider::TechStore),
            "2" => Ok(Provider::FlatCatalog),
            "3" => Ok(Provider::WrappedFeed),
            _ => Err(format!(
                "Unknown provider '{s}' (expected 1, 2, 3 or provider-N)"
            )),
        }
    }
}
