//! The owned cart store.

use crate::cart::item::{CartItem, ProgramCandidate};
use crate::cart::pricing::CartPricing;
use crate::ids::{CartItemId, SubscriptionId};
use crate::money::{Currency, Money};

/// Change notification delivered to cart subscribers after a mutation
/// has been applied. No event fires on no-op paths (duplicate-title
/// add, removal of an unknown id).
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded(CartItemId),
    ItemRemoved(CartItemId),
    Cleared,
}

type Subscriber = Box<dyn Fn(&CartEvent)>;

/// The authoritative in-memory collection of selected programs.
///
/// A `CartStore` is an owned value handed to its consumers rather
/// than an ambient global; dependents that need to react to changes
/// register a callback with [`subscribe`](CartStore::subscribe).
///
/// Lifetime is the application session: nothing here persists.
/// All operations are total functions over the collection — there is
/// no failure mode, and inputs are not validated (an empty title or a
/// zero duration is accepted as-is).
#[derive(Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a program to the cart.
    ///
    /// Assigns a fresh id and resolves the price via the duration
    /// table when the candidate carries none. Silent no-op returning
    /// `None` when an item with the same title is already present —
    /// this is documented idempotence, not a failure; the programs
    /// page relies on it to toggle already-added buttons.
    pub fn add_item(&mut self, candidate: ProgramCandidate) -> Option<CartItemId> {
        if self.is_in_cart(&candidate.title) {
            return None;
        }

        let item = CartItem::from_candidate(candidate);
        let id = item.id.clone();
        self.items.push(item);
        self.notify(&CartEvent::ItemAdded(id.clone()));
        Some(id)
    }

    /// Remove the item with the given id. Returns whether anything
    /// was removed; an unknown id is a no-op, not an error.
    pub fn remove_item(&mut self, id: &CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            self.notify(&CartEvent::ItemRemoved(id.clone()));
        }
        removed
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.notify(&CartEvent::Cleared);
    }

    /// True iff some item's title equals the argument.
    pub fn is_in_cart(&self, title: &str) -> bool {
        self.items.iter().any(|i| i.title == title)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ordered external price references for the checkout handshake.
    pub fn price_refs(&self) -> Vec<crate::ids::PriceRef> {
        self.items.iter().map(|i| i.price_ref.clone()).collect()
    }

    /// Sum of all unit prices.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(|i| &i.unit_price), Currency::USD)
    }

    /// Derived pricing snapshot.
    pub fn pricing(&self) -> CartPricing {
        CartPricing {
            subtotal: self.subtotal(),
            item_count: self.items.len(),
        }
    }

    /// Register a callback invoked after every applied mutation.
    pub fn subscribe(&mut self, callback: impl Fn(&CartEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self, event: &CartEvent) {
        for (_, callback) in &self.subscribers {
            callback(event);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
