//! Checkout error taxonomy.

use fitfront_api::ApiError;
use thiserror::Error;

/// Errors produced by a checkout attempt.
///
/// All of these are recovered locally: the cart is left untouched and
/// the user may retry, which re-runs the whole sequence.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Another checkout attempt is already in flight.
    #[error("a checkout attempt is already in flight")]
    InFlight,

    /// The cart was empty when checkout was triggered.
    #[error("cart is empty")]
    EmptyCart,

    /// Bot verification reported an empty token.
    #[error("bot verification unavailable")]
    VerificationUnavailable,

    /// The token request was rejected by the backend.
    #[error("token generation failed{}", fmt_detail(.detail))]
    TokenRejected { detail: Option<String> },

    /// The session request was rejected by the backend.
    #[error("session creation failed{}", fmt_detail(.detail))]
    SessionRejected { detail: Option<String> },

    /// Transport failure or malformed response at either step.
    #[error("checkout request failed: {0}")]
    Network(#[source] ApiError),
}

impl CheckoutError {
    /// Classify an API failure from the token step.
    pub(crate) fn at_token_step(error: ApiError) -> Self {
        match error {
            ApiError::Server { detail, .. } => CheckoutError::TokenRejected { detail },
            other => CheckoutError::Network(other),
        }
    }

    /// Classify an API failure from the session step.
    pub(crate) fn at_session_step(error: ApiError) -> Self {
        match error {
            ApiError::Server { detail, .. } => CheckoutError::SessionRejected { detail },
            other => CheckoutError::Network(other),
        }
    }

    /// The inline message a storefront shows for this failure: the
    /// server's `detail` verbatim when present, a generic fallback
    /// otherwise.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::InFlight => "A checkout is already in progress.".into(),
            CheckoutError::EmptyCart => "Your cart is empty.".into(),
            CheckoutError::VerificationUnavailable => {
                "Verification is unavailable right now. Please try again.".into()
            }
            CheckoutError::TokenRejected { detail: Some(d) }
            | CheckoutError::SessionRejected { detail: Some(d) } => d.clone(),
            CheckoutError::TokenRejected { detail: None } => "token generation failed".into(),
            CheckoutError::SessionRejected { detail: None } => "session creation failed".into(),
            CheckoutError::Network(_) => {
                "Something went wrong during checkout. Please try again.".into()
            }
        }
    }
}

fn fmt_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}
