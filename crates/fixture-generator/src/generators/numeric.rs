//! Numeric and boolean value generators.

use rand::Rng;

/// Probability that an item is reported as available (3:1 bias).
pub const AVAILABILITY_WEIGHT: f64 = 0.75;

/// Upper bound (inclusive) of the provider 1 stock quantity.
pub const MAX_STOCK_QUANTITY: u32 = 100;

/// Round to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Multiply `base` by a uniform factor in `[low, high]` and round to cents.
pub fn perturb_price<R: Rng>(rng: &mut R, base: f64, (low, high): (f64, f64)) -> f64 {
    round_to_cents(base * rng.gen_range(low..=high))
}

/// Random availability flag, true with probability [`AVAILABILITY_WEIGHT`].
pub fn weighted_availability<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(AVAILABILITY_WEIGHT)
}

/// Random stock quantity in `0..=MAX_STOCK_QUANTITY`.
pub fn stock_quantity<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(0..=MAX_STOCK_QUANTITY)
}
