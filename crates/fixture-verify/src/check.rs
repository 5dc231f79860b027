//! Item-level checks shared by the three document shapes.

use crate::report::Violation;
use fixture_generator::generators::numeric::MAX_STOCK_QUANTITY;
use fixture_generator::generators::pattern;
use fixture_generator::{
    template_for, Provider, Provider1Item, Provider2Item, Provider3Item, DEFAULT_CURRENCY,
};

/// Slack on price bounds for rounding to cents.
pub const PRICE_TOLERANCE: f64 = 0.006;

/// Provider-independent view of one item, keyed by the provider's JSON names.
pub struct ItemView<'a> {
    pub id: (&'static str, &'a str),
    pub name: (&'static str, &'a str),
    pub description: (&'static str, &'a str),
    pub price: (&'static str, f64),
    pub currency: (&'static str, &'a str),
    pub available: bool,
    pub quantity: Option<(&'static str, u32)>,
    pub timestamp: (&'static str, &'a str),
}

impl<'a> From<&'a Provider1Item> for ItemView<'a> {
    fn from(item: &'a Provider1Item) -> Self {
        Self {
            id: ("product_id", &item.product_id),
            name: ("product_name", &item.product_name),
            description: ("product_desc", &item.product_desc),
            price: ("pricing.amount", item.pricing.amount),
            currency: ("pricing.currency_code", &item.pricing.currency_code),
            available: item.stock.in_stock,
            quantity: Some(("stock.quantity", item.stock.quantity)),
            timestamp: ("last_modified", &item.last_modified),
        }
    }
}

impl<'a> From<&'a Provider2Item> for ItemView<'a> {
    fn from(item: &'a Provider2Item) -> Self {
        Self {
            id: ("itemId", &item.item_id),
            name: ("title", &item.title),
            description: ("details", &item.details),
            price: ("cost", item.cost),
            currency: ("currencyType", &item.currency_type),
            available: item.is_available,
            quantity: None,
            timestamp: ("updatedAt", &item.updated_at),
        }
    }
}

impl<'a> From<&'a Provider3Item> for ItemView<'a> {
    fn from(item: &'a Provider3Item) -> Self {
        Self {
            id: ("ID", &item.id),
            name: ("NAME", &item.name),
            description: ("DESCRIPTION", &item.description),
            price: ("PRICE", item.price),
            currency: ("CURRENCY", &item.currency),
            available: item.available,
            quantity: None,
            timestamp: ("LAST_UPDATE", &item.last_update),
        }
    }
}

/// Check the item at zero-based `position` against what the generator produces there.
///
/// `timestamp` is the value every item of the document must carry.
pub fn check_item(
    provider: Provider,
    position: usize,
    item: &ItemView<'_>,
    timestamp: &str,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let template = template_for(position);
    let id = item.id.1;

    let expected_id = pattern::product_id(provider.index(), position);
    if id != expected_id {
        violations.push(Violation::item(
            id,
            item.id.0,
            format!("expected '{expected_id}' at position {position}"),
        ));
    }

    let expected_name = pattern::suffixed_name(template.name, &provider.name_suffixes(), position);
    if item.name.1 != expected_name {
        violations.push(Violation::item(
            id,
            item.name.0,
            format!("expected '{expected_name}', found '{}'", item.name.1),
        ));
    }

    if item.description.1 != template.description {
        violations.push(Violation::item(
            id,
            item.description.0,
            format!(
                "expected '{}', found '{}'",
                template.description, item.description.1
            ),
        ));
    }

    let (low, high) = provider.price_range();
    let (min, max) = (template.base_price * low, template.base_price * high);
    let price = item.price.1;
    if price < min - PRICE_TOLERANCE || price > max + PRICE_TOLERANCE {
        violations.push(Violation::item(
            id,
            item.price.0,
            format!("{price} outside [{min:.2}, {max:.2}]"),
        ));
    }

    if item.currency.1 != DEFAULT_CURRENCY {
        violations.push(Violation::item(
            id,
            item.currency.0,
            format!("expected '{DEFAULT_CURRENCY}', found '{}'", item.currency.1),
        ));
    }

    if let Some((field, quantity)) = item.quantity {
        if quantity > MAX_STOCK_QUANTITY {
            violations.push(Violation::item(
                id,
                field,
                format!("{quantity} exceeds {MAX_STOCK_QUANTITY}"),
            ));
        }
    }

    if item.timestamp.1 != timestamp {
        violations.push(Violation::item(
            id,
            item.timestamp.0,
            format!("expected '{timestamp}', found '{}'", item.timestamp.1),
        ));
    }

    violations
}
