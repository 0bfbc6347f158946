//! Browser-navigation seam.

use tracing::info;

/// Performs the full-page navigation that hands the user over to the
/// hosted checkout. This is a one-way transition out of the
/// application — no client state is observable afterwards — so it
/// sits behind a trait: the embedding shell supplies the real
/// redirect, tests record the URL instead.
pub trait Navigator {
    fn redirect(&self, url: &str);
}

/// Default navigator for headless and development use: logs the
/// hand-off and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, url: &str) {
        info!(%url, "redirecting to hosted checkout");
    }
}
