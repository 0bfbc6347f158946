//! Cart line item types.

use crate::cart::pricing::default_price_for_duration;
use crate::catalog::Program;
use crate::ids::{CartItemId, PriceRef};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An item held in the cart.
///
/// One cart item always represents one program at quantity one; the
/// checkout handshake hard-codes `quantity = 1` to match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique per session, assigned at insertion time.
    pub id: CartItemId,
    /// Display name and the cart's deduplication key.
    pub title: String,
    /// Program length in weeks.
    pub duration_weeks: u32,
    /// Display copy (not used in any decision).
    pub description: String,
    /// Display image reference (not used in any decision).
    pub image_ref: String,
    /// Resolved price at insertion time.
    pub unit_price: Money,
    /// External provider price reference, passed through unmodified.
    pub price_ref: PriceRef,
}

/// What a caller hands to [`crate::CartStore::add_item`]: a program
/// selection without an id and with an optional explicit price.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCandidate {
    pub title: String,
    pub duration_weeks: u32,
    pub description: String,
    pub image_ref: String,
    pub price_ref: PriceRef,
    /// Explicit price; the duration table applies when absent.
    pub price: Option<Money>,
}

impl ProgramCandidate {
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

impl From<Program> for ProgramCandidate {
    fn from(program: Program) -> Self {
        Self {
            title: program.title,
            duration_weeks: program.duration_weeks,
            description: program.description,
            image_ref: program.image_ref,
            price_ref: program.price_ref,
            price: program.price,
        }
    }
}

impl CartItem {
    /// Materialize a candidate into a cart item: assign a fresh id and
    /// resolve the price via the duration table when none was given.
    pub(crate) fn from_candidate(candidate: ProgramCandidate) -> Self {
        let unit_price = candidate
            .price
            .unwrap_or_else(|| default_price_for_duration(candidate.duration_weeks));
        Self {
            id: CartItemId::generate(),
            title: candidate.title,
            duration_weeks: candidate.duration_weeks,
            description: candidate.description,
            image_ref: candidate.image_ref,
            unit_price,
            price_ref: candidate.price_ref,
        }
    }
}
