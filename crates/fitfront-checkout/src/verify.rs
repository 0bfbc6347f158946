//! Bot-verification adapter.
//!
//! Wraps the third-party verification script: load it at most once
//! per session, execute it for a named action, and hand back a token.
//! Load failures are retried a bounded number of times with linearly
//! increasing delay; after that the adapter degrades to an **empty
//! token** instead of blocking the caller. An empty token means
//! "verification unavailable" — callers decide whether to block or
//! proceed, this layer never hard-errors.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reported by a [`ScriptBackend`].
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script itself could not be loaded.
    #[error("script load failed: {0}")]
    Load(String),
    /// The script loaded but refused to issue a token.
    #[error("token issuance rejected: {0}")]
    Execute(String),
}

/// Seam over the third-party verification script.
///
/// The real implementation injects a `<script>` tag and calls the
/// provider's `execute`; tests substitute deterministic fakes.
#[async_trait]
pub trait ScriptBackend: Send + Sync {
    /// Load the script. Called until it succeeds once.
    async fn load(&self) -> Result<(), ScriptError>;
    /// Execute the loaded script for an action, yielding a token.
    async fn execute(&self, action: &str) -> Result<String, ScriptError>;
}

/// Script loader lifecycle, kept as one tagged value rather than
/// scattered boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// No load attempted yet.
    Idle,
    /// A load attempt is in progress.
    Loading,
    /// Script loaded; execution is available for the session.
    Ready,
    /// Waiting out the delay after a failed attempt.
    Retrying { attempt: u32 },
    /// Retry bound exhausted; the adapter only reports empty tokens
    /// for the rest of the session.
    Failed,
}

/// Retry bounds for script loading.
#[derive(Debug, Clone)]
pub struct VerifyPolicy {
    /// Maximum number of load attempts.
    pub max_attempts: u32,
    /// Delay after attempt `n` is `n * base_delay`.
    pub base_delay: Duration,
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// Loads the verification script once and issues per-action tokens.
pub struct VerificationAdapter<B> {
    backend: B,
    policy: VerifyPolicy,
    state: Mutex<LoaderState>,
}

impl<B: ScriptBackend> VerificationAdapter<B> {
    /// Create an adapter with the default retry policy.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            policy: VerifyPolicy::default(),
            state: Mutex::new(LoaderState::Idle),
        }
    }

    /// Override the retry policy.
    pub fn with_policy(mut self, policy: VerifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current loader state.
    pub fn state(&self) -> LoaderState {
        *self.lock_state()
    }

    /// Obtain a verification token for an action.
    ///
    /// Returns an empty string when the script cannot be loaded
    /// within the retry bound or when token issuance is rejected.
    pub async fn token_for(&self, action: &str) -> String {
        if !self.ensure_loaded().await {
            return String::new();
        }

        match self.backend.execute(action).await {
            Ok(token) => {
                debug!(action, "verification token issued");
                token
            }
            Err(error) => {
                warn!(action, %error, "verification execution failed");
                String::new()
            }
        }
    }

    /// Drive the loader to `Ready` if possible. Returns whether the
    /// script is available.
    async fn ensure_loaded(&self) -> bool {
        match self.state() {
            LoaderState::Ready => return true,
            LoaderState::Failed => return false,
            _ => {}
        }

        let mut attempt = 1;
        loop {
            self.set_state(LoaderState::Loading);
            match self.backend.load().await {
                Ok(()) => {
                    debug!(attempt, "verification script loaded");
                    self.set_state(LoaderState::Ready);
                    return true;
                }
                Err(error) => {
                    warn!(attempt, %error, "verification script load failed");
                    if attempt >= self.policy.max_attempts {
                        self.set_state(LoaderState::Failed);
                        return false;
                    }
                    self.set_state(LoaderState::Retrying { attempt });
                    tokio::time::sleep(self.policy.base_delay * attempt).await;
                    attempt += 1;
                }
            }
        }
    }

    fn set_state(&self, next: LoaderState) {
        *self.lock_state() = next;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<B: std::fmt::Debug> std::fmt::Debug for VerificationAdapter<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationAdapter")
            .field("backend", &self.backend)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish()
    }
}
