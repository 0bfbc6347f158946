//! Payments endpoints: the two-call hosted-checkout handshake.
//!
//! The backend never exposes card handling; it issues a short-lived
//! checkout token (after verifying the captcha token) and then a
//! hosted-checkout session URL the browser is redirected to.

use fitfront_commerce::PriceRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Request body for `POST /api/payments/generate-token`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutTokenRequest {
    /// External price references for every cart item, in cart order.
    pub price_ids: Vec<PriceRef>,
    /// Bot-verification token for the "checkout" action.
    pub captcha_token: String,
}

/// Response of `POST /api/payments/generate-token`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutTokenResponse {
    /// Opaque signed token consumed by the session call.
    pub token: String,
    /// Unix timestamp when the token expires.
    pub expires_at: i64,
}

/// Request body for `POST /api/payments/create-checkout-session`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCheckoutSessionRequest {
    /// Token from the generate-token call.
    pub token: String,
    /// Same ordered price references the token was issued for.
    pub price_ids: Vec<PriceRef>,
    /// Items are single-quantity programs.
    pub quantity: u32,
    /// Landing page after a successful payment.
    pub success_url: String,
    /// Landing page after a cancelled payment.
    pub cancel_url: String,
}

/// Response of `POST /api/payments/create-checkout-session`.
///
/// Only `url` drives client behavior; the remaining fields are kept
/// because the backend sends them and they are useful in logs.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionResponse {
    /// Provider session identifier.
    pub session_id: String,
    /// Hosted checkout page to navigate to.
    pub url: String,
    /// Unix timestamp when the session expires.
    pub expires_at: i64,
    /// Provider-side payment status at creation time.
    pub payment_status: String,
}

impl ApiClient {
    /// Exchange price references plus a captcha token for a checkout
    /// token.
    pub async fn generate_checkout_token(
        &self,
        request: &CheckoutTokenRequest,
    ) -> Result<CheckoutTokenResponse, ApiError> {
        let response: CheckoutTokenResponse = self
            .post_json("/api/payments/generate-token", request)
            .await?;
        info!(expires_at = response.expires_at, "obtained checkout token");
        Ok(response)
    }

    /// Create a hosted-checkout session and get its redirect URL.
    pub async fn create_checkout_session(
        &self,
        request: &CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, ApiError> {
        let response: CheckoutSessionResponse = self
            .post_json("/api/payments/create-checkout-session", request)
            .await?;
        info!(
            session_id = %response.session_id,
            payment_status = %response.payment_status,
            "created checkout session"
        );
        Ok(response)
    }
}
