//! Contact-form submission endpoint.

use serde::Serialize;
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Request body for `POST /api/contact/email`.
///
/// The backend acknowledges with success/failure only; there is no
/// structured response contract.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Bot-verification token for the "contact" action.
    pub g_recaptcha_response: String,
}

impl ApiClient {
    /// Submit a contact-form message.
    pub async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.post_json_status("/api/contact/email", message).await?;
        info!("contact message accepted");
        Ok(())
    }
}
