//! Shared HTTP client over the storefront backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StorefrontConfig;
use crate::error::ApiError;

/// Shape of the backend's error bodies: `{"detail": "..."}`.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Typed client for the storefront backend.
///
/// Owns one `reqwest::Client` (connection reuse) and the storefront
/// configuration. All endpoint wrappers in this crate funnel through
/// [`post_json`](ApiClient::post_json) / [`get_json`](ApiClient::get_json)
/// so status handling and `detail` extraction live in one place.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: StorefrontConfig,
}

impl ApiClient {
    /// Create a client with a 30 second request timeout.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// POST a JSON body and decode a JSON response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        debug!(%url, "sending POST request");

        let response = self.http.post(&url).json(body).send().await?;
        self.decode(path, response).await
    }

    /// POST a JSON body where only the status matters; the response
    /// body, if any, is discarded.
    pub(crate) async fn post_json_status<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.api_url(path);
        debug!(%url, "sending POST request");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(server_error(path, status.as_u16(), &bytes));
        }
        Ok(())
    }

    /// GET a JSON response.
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        debug!(%url, "sending GET request");

        let response = self.http.get(&url).send().await?;
        self.decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(server_error(path, status.as_u16(), &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn server_error(path: &str, status: u16, bytes: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.detail);
    warn!(path, status, ?detail, "backend rejected request");
    ApiError::Server { status, detail }
}
