//! Program catalog types.
//!
//! The storefront sells exactly one kind of product: a training
//! program running for a fixed number of weeks. The catalog itself is
//! static data supplied by the embedding application; this crate only
//! defines its shape.

use crate::ids::PriceRef;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A training program offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    /// Display name. Titles are unique across the catalog and double
    /// as the cart's deduplication key.
    pub title: String,
    /// Program length in weeks; drives the default price when no
    /// explicit price is set.
    pub duration_weeks: u32,
    /// Marketing copy shown on the program card.
    pub description: String,
    /// Opaque reference to the card image asset.
    pub image_ref: String,
    /// Price object on the external payment provider's side.
    pub price_ref: PriceRef,
    /// Explicit price override. When `None`, the duration-keyed
    /// default table applies at cart-insertion time.
    pub price: Option<Money>,
}

impl Program {
    /// Create a program priced by the default duration table.
    pub fn new(
        title: impl Into<String>,
        duration_weeks: u32,
        description: impl Into<String>,
        image_ref: impl Into<String>,
        price_ref: PriceRef,
    ) -> Self {
        Self {
            title: title.into(),
            duration_weeks,
            description: description.into(),
            image_ref: image_ref.into(),
            price_ref,
            price: None,
        }
    }

    /// Set an explicit price, bypassing the duration table.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }
}
