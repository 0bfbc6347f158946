//! Checkout orchestration for the FitFront storefront.
//!
//! Converts the current cart into a redirect to an externally hosted
//! checkout page, gated by bot verification:
//!
//! 1. obtain a verification token for the `"checkout"` action via the
//!    [`verify::VerificationAdapter`] (retrying script loader),
//! 2. exchange the cart's price references plus that token for a
//!    short-lived checkout token,
//! 3. exchange the checkout token for a hosted-checkout session URL,
//! 4. hand the URL to the [`navigate::Navigator`] — a one-way
//!    transition out of the application.
//!
//! The orchestrator never mutates the cart, refuses overlapping
//! invocations, and re-runs the whole sequence (fresh verification
//! token included) on every attempt.

pub mod error;
pub mod navigate;
pub mod orchestrator;
pub mod verify;

pub use error::CheckoutError;
pub use navigate::{LoggingNavigator, Navigator};
pub use orchestrator::CheckoutOrchestrator;
pub use verify::{LoaderState, ScriptBackend, ScriptError, VerificationAdapter, VerifyPolicy};
