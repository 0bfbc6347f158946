//! The checkout orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};

use fitfront_api::payments::{CheckoutTokenRequest, CreateCheckoutSessionRequest};
use fitfront_api::ApiClient;
use fitfront_commerce::CartStore;
use tracing::{info, warn};

use crate::error::CheckoutError;
use crate::navigate::Navigator;
use crate::verify::{ScriptBackend, VerificationAdapter};

/// Action name the verification provider scores checkout under.
const CHECKOUT_ACTION: &str = "checkout";

/// Quantity per line item; the cart holds single-quantity programs.
const CHECKOUT_QUANTITY: u32 = 1;

/// Drives the strict two-call handshake that turns the cart into a
/// hosted-checkout redirect.
///
/// At most one attempt is in flight at a time: a second invocation
/// while one is outstanding fails fast with [`CheckoutError::InFlight`]
/// and performs no network calls. Nothing here mutates the cart, and
/// every attempt runs the full sequence from a fresh verification
/// token — no partial state survives a failure.
pub struct CheckoutOrchestrator<B, N> {
    api: ApiClient,
    verifier: VerificationAdapter<B>,
    navigator: N,
    in_flight: AtomicBool,
}

impl<B: ScriptBackend, N: Navigator> CheckoutOrchestrator<B, N> {
    pub fn new(api: ApiClient, verifier: VerificationAdapter<B>, navigator: N) -> Self {
        Self {
            api,
            verifier,
            navigator,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an attempt is currently outstanding. The UI disables
    /// the checkout control while this is true.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run the checkout sequence for the current cart.
    ///
    /// On success the navigator has been handed the hosted-checkout
    /// URL (a one-way transition); the URL is also returned for
    /// observability. On failure the cart is untouched and the user
    /// may retry.
    pub async fn begin_checkout(&self, cart: &CartStore) -> Result<String, CheckoutError> {
        let _guard = InFlightGuard::claim(&self.in_flight).ok_or(CheckoutError::InFlight)?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let price_ids = cart.price_refs();

        // Fresh verification token on every attempt.
        let captcha_token = self.verifier.token_for(CHECKOUT_ACTION).await;
        if captcha_token.is_empty() {
            warn!("checkout blocked: verification unavailable");
            return Err(CheckoutError::VerificationUnavailable);
        }

        let token = self
            .api
            .generate_checkout_token(&CheckoutTokenRequest {
                price_ids: price_ids.clone(),
                captcha_token,
            })
            .await
            .map_err(CheckoutError::at_token_step)?;

        let config = self.api.config();
        let session = self
            .api
            .create_checkout_session(&CreateCheckoutSessionRequest {
                token: token.token,
                price_ids,
                quantity: CHECKOUT_QUANTITY,
                success_url: config.success_url(),
                cancel_url: config.cancel_url(),
            })
            .await
            .map_err(CheckoutError::at_session_step)?;

        info!(session_id = %session.session_id, "handing off to hosted checkout");
        self.navigator.redirect(&session.url);
        Ok(session.url)
    }
}

/// Claims the busy flag for the duration of one attempt; released on
/// every exit path, including panics, via `Drop`.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
