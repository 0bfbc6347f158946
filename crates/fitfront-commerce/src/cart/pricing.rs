//! Default price resolution and derived cart pricing.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Resolve the default price for a program by its duration.
///
/// Fixed table: 2 weeks -> $9.99, 4 -> $19.99, 6 -> $29.99, anything
/// else -> $0.00. Unknown durations are accepted, not rejected; a
/// zero price is the documented fallback.
pub fn default_price_for_duration(duration_weeks: u32) -> Money {
    let cents = match duration_weeks {
        2 => 999,
        4 => 1999,
        6 => 2999,
        _ => 0,
    };
    Money::new(cents, Currency::USD)
}

/// Derived pricing snapshot for the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of all unit prices.
    pub subtotal: Money,
    /// Number of items in the cart.
    pub item_count: usize,
}
