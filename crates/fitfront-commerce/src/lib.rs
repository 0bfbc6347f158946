//! Cart and catalog domain types for the FitFront storefront.
//!
//! This crate holds the pure, I/O-free half of the storefront:
//!
//! - **Catalog**: the `Program` offerings the storefront sells
//! - **Cart**: an owned, session-lifetime [`CartStore`] with
//!   insertion-order items, title-based deduplication, and explicit
//!   change notifications
//! - **Money**: cents-based amounts and the duration-keyed default
//!   price table
//!
//! The cart is deliberately a plain owned value: consumers receive a
//! handle to it instead of reaching through a process-wide global,
//! and observe mutations through [`CartStore::subscribe`].

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;

pub use cart::{CartEvent, CartItem, CartStore, ProgramCandidate};
pub use catalog::Program;
pub use ids::{CartItemId, PriceRef, SubscriptionId};
pub use money::{Currency, Money};
