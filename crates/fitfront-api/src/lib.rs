//! HTTP client layer for the FitFront storefront backend.
//!
//! Thin typed wrappers over the backend's three surfaces:
//!
//! - **Payments**: the two-call hosted-checkout handshake
//!   (`generate-token`, then `create-checkout-session`)
//! - **Contact**: the contact-form submission endpoint
//! - **Media**: latest-video lookups for the read-only embeds
//!
//! All calls go through [`ApiClient`], which owns the `reqwest`
//! client and translates non-success responses into [`ApiError`],
//! surfacing the backend's optional `detail` message.

pub mod client;
pub mod config;
pub mod contact;
pub mod error;
pub mod media;
pub mod payments;

pub use client::ApiClient;
pub use config::StorefrontConfig;
pub use error::ApiError;
