//! Shopping cart: items, default pricing, and the owned store.

mod item;
mod pricing;
mod store;

pub use item::{CartItem, ProgramCandidate};
pub use pricing::{default_price_for_duration, CartPricing};
pub use store::{CartEvent, CartStore};
