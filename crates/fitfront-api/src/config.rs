//! Storefront client configuration.

use url::Url;

/// In-app hash route the checkout provider redirects to on success.
pub const PAYMENT_SUCCESS_ROUTE: &str = "/payment-success";
/// In-app hash route the checkout provider redirects to on cancel.
pub const PAYMENT_CANCEL_ROUTE: &str = "/payment-cancel";

/// Configuration for talking to the storefront backend.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the backend API (e.g. `http://localhost:8000`).
    pub api_base: Url,
    /// Origin of the running application; the hosted checkout
    /// redirects back into it after payment.
    pub app_origin: Url,
}

impl StorefrontConfig {
    /// Create a configuration from the API base and app origin.
    pub fn new(api_base: Url, app_origin: Url) -> Self {
        Self {
            api_base,
            app_origin,
        }
    }

    /// Local development defaults: backend on port 8000, app served
    /// from the Vite dev server.
    pub fn local_dev() -> Self {
        Self {
            api_base: Url::parse("http://localhost:8000").expect("static url"),
            app_origin: Url::parse("http://localhost:5173").expect("static url"),
        }
    }

    /// Resolve an API path (e.g. `/api/payments/generate-token`)
    /// against the base URL.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL the checkout provider sends the user to after a successful
    /// payment: `<origin>/#/payment-success`.
    pub fn success_url(&self) -> String {
        self.page_url(PAYMENT_SUCCESS_ROUTE)
    }

    /// URL the checkout provider sends the user to when they cancel:
    /// `<origin>/#/payment-cancel`.
    pub fn cancel_url(&self) -> String {
        self.page_url(PAYMENT_CANCEL_ROUTE)
    }

    /// Hash-router landing page URL for an in-app route.
    fn page_url(&self, route: &str) -> String {
        format!(
            "{}/#{}",
            self.app_origin.as_str().trim_end_matches('/'),
            route
        )
    }
}
