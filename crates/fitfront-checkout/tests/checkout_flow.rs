//! End-to-end checkout sequences against a mock payments backend.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use fitfront_api::{ApiClient, StorefrontConfig};
use fitfront_checkout::{
    CheckoutError, CheckoutOrchestrator, Navigator, ScriptBackend, ScriptError,
    VerificationAdapter, VerifyPolicy,
};
use fitfront_commerce::{CartStore, PriceRef, ProgramCandidate};
use httpmock::prelude::*;
use url::Url;

/// Backend whose script always loads and issues a fixed token.
struct StaticBackend;

#[async_trait]
impl ScriptBackend for StaticBackend {
    async fn load(&self) -> Result<(), ScriptError> {
        Ok(())
    }

    async fn execute(&self, _action: &str) -> Result<String, ScriptError> {
        Ok("captcha-ok".to_string())
    }
}

/// Backend whose script never loads.
struct BrokenBackend;

#[async_trait]
impl ScriptBackend for BrokenBackend {
    async fn load(&self) -> Result<(), ScriptError> {
        Err(ScriptError::Load("blocked by client".into()))
    }

    async fn execute(&self, _action: &str) -> Result<String, ScriptError> {
        Err(ScriptError::Execute("not loaded".into()))
    }
}

/// Navigator that records every redirect instead of performing it.
#[derive(Default)]
struct RecordingNavigator {
    urls: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn recorded(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Navigator for &RecordingNavigator {
    fn redirect(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

fn api_for(server: &MockServer) -> ApiClient {
    let base = Url::parse(&server.base_url()).unwrap();
    let origin = Url::parse("https://fitfront.example").unwrap();
    ApiClient::new(StorefrontConfig::new(base, origin)).unwrap()
}

fn two_item_cart() -> CartStore {
    let mut cart = CartStore::new();
    cart.add_item(ProgramCandidate::new(
        "Kickstart",
        2,
        "two week reset",
        "img/kickstart.webp",
        PriceRef::new("price_kickstart"),
    ));
    cart.add_item(ProgramCandidate::new(
        "Builder",
        4,
        "four week strength block",
        "img/builder.webp",
        PriceRef::new("price_builder"),
    ));
    cart
}

fn no_retry_policy() -> VerifyPolicy {
    VerifyPolicy {
        max_attempts: 1,
        base_delay: Duration::ZERO,
    }
}

#[tokio::test]
async fn happy_path_runs_two_calls_in_order_and_redirects() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/payments/generate-token")
            .json_body(serde_json::json!({
                "price_ids": ["price_kickstart", "price_builder"],
                "captcha_token": "captcha-ok",
            }));
        then.status(200).json_body(serde_json::json!({
            "token": "tok-1",
            "expires_at": 1_900_000_000i64,
        }));
    });
    let session_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/payments/create-checkout-session")
            .json_body(serde_json::json!({
                "token": "tok-1",
                "price_ids": ["price_kickstart", "price_builder"],
                "quantity": 1,
                "success_url": "https://fitfront.example/#/payment-success",
                "cancel_url": "https://fitfront.example/#/payment-cancel",
            }));
        then.status(201).json_body(serde_json::json!({
            "session_id": "cs_1",
            "url": "https://checkout.example/pay/cs_1",
            "expires_at": 1_900_000_000i64,
            "payment_status": "unpaid",
        }));
    });

    let cart = two_item_cart();
    let navigator = RecordingNavigator::default();
    let orchestrator = CheckoutOrchestrator::new(
        api_for(&server),
        VerificationAdapter::new(StaticBackend),
        &navigator,
    );

    let url = orchestrator.begin_checkout(&cart).await.unwrap();

    token_mock.assert();
    session_mock.assert();
    assert_eq!(url, "https://checkout.example/pay/cs_1");
    assert_eq!(navigator.recorded(), vec![url]);
    assert!(!orchestrator.is_in_flight());
}

#[tokio::test]
async fn token_rejection_surfaces_detail_and_skips_session_call() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/payments/generate-token");
        then.status(400)
            .json_body(serde_json::json!({"detail": "bad captcha"}));
    });
    let session_mock = server.mock(|when, then| {
        when.method(POST).path("/api/payments/create-checkout-session");
        then.status(201);
    });

    let cart = two_item_cart();
    let items_before = cart.items().to_vec();
    let navigator = RecordingNavigator::default();
    let orchestrator = CheckoutOrchestrator::new(
        api_for(&server),
        VerificationAdapter::new(StaticBackend),
        &navigator,
    );

    let err = orchestrator.begin_checkout(&cart).await.unwrap_err();

    assert_eq!(err.user_message(), "bad captcha");
    assert!(matches!(err, CheckoutError::TokenRejected { .. }));
    session_mock.assert_hits(0);
    assert!(navigator.recorded().is_empty());
    // Failure leaves the cart untouched; the user may retry.
    assert_eq!(cart.items(), items_before.as_slice());
    assert!(!orchestrator.is_in_flight());
}

#[tokio::test]
async fn session_rejection_without_detail_uses_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/payments/generate-token");
        then.status(200).json_body(serde_json::json!({
            "token": "tok-1",
            "expires_at": 1_900_000_000i64,
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/payments/create-checkout-session");
        then.status(500).body("boom");
    });

    let cart = two_item_cart();
    let navigator = RecordingNavigator::default();
    let orchestrator = CheckoutOrchestrator::new(
        api_for(&server),
        VerificationAdapter::new(StaticBackend),
        &navigator,
    );

    let err = orchestrator.begin_checkout(&cart).await.unwrap_err();

    assert!(matches!(err, CheckoutError::SessionRejected { detail: None }));
    assert_eq!(err.user_message(), "session creation failed");
    assert!(navigator.recorded().is_empty());
}

#[tokio::test]
async fn overlapping_attempts_produce_one_network_sequence() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/api/payments/generate-token");
        then.status(200)
            .delay(Duration::from_millis(200))
            .json_body(serde_json::json!({
                "token": "tok-1",
                "expires_at": 1_900_000_000i64,
            }));
    });
    let session_mock = server.mock(|when, then| {
        when.method(POST).path("/api/payments/create-checkout-session");
        then.status(201).json_body(serde_json::json!({
            "session_id": "cs_1",
            "url": "https://checkout.example/pay/cs_1",
            "expires_at": 1_900_000_000i64,
            "payment_status": "unpaid",
        }));
    });

    let cart = two_item_cart();
    let navigator = RecordingNavigator::default();
    let orchestrator = CheckoutOrchestrator::new(
        api_for(&server),
        VerificationAdapter::new(StaticBackend),
        &navigator,
    );

    let (first, second) = tokio::join!(
        orchestrator.begin_checkout(&cart),
        orchestrator.begin_checkout(&cart),
    );

    // One attempt wins; the other fails fast without touching the wire.
    let (winner, loser) = if first.is_ok() {
        (first, second)
    } else {
        (second, first)
    };
    assert_eq!(winner.unwrap(), "https://checkout.example/pay/cs_1");
    assert!(matches!(loser.unwrap_err(), CheckoutError::InFlight));
    token_mock.assert_hits(1);
    session_mock.assert_hits(1);
    assert_eq!(navigator.recorded().len(), 1);
}

#[tokio::test]
async fn empty_cart_fails_before_any_network_call() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/api/payments/generate-token");
        then.status(200);
    });

    let cart = CartStore::new();
    let navigator = RecordingNavigator::default();
    let orchestrator = CheckoutOrchestrator::new(
        api_for(&server),
        VerificationAdapter::new(StaticBackend),
        &navigator,
    );

    let err = orchestrator.begin_checkout(&cart).await.unwrap_err();

    assert!(matches!(err, CheckoutError::EmptyCart));
    token_mock.assert_hits(0);
}

#[tokio::test]
async fn unavailable_verification_blocks_checkout_locally() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/api/payments/generate-token");
        then.status(200);
    });

    let cart = two_item_cart();
    let navigator = RecordingNavigator::default();
    let orchestrator = CheckoutOrchestrator::new(
        api_for(&server),
        VerificationAdapter::new(BrokenBackend).with_policy(no_retry_policy()),
        &navigator,
    );

    let err = orchestrator.begin_checkout(&cart).await.unwrap_err();

    assert!(matches!(err, CheckoutError::VerificationUnavailable));
    token_mock.assert_hits(0);
    assert!(navigator.recorded().is_empty());
}

#[tokio::test]
async fn transport_failure_maps_to_network_error() {
    // Unroutable port: connection refused before any server logic.
    let api = ApiClient::new(StorefrontConfig::new(
        Url::parse("http://127.0.0.1:1").unwrap(),
        Url::parse("https://fitfront.example").unwrap(),
    ))
    .unwrap();

    let cart = two_item_cart();
    let navigator = RecordingNavigator::default();
    let orchestrator =
        CheckoutOrchestrator::new(api, VerificationAdapter::new(StaticBackend), &navigator);

    let err = orchestrator.begin_checkout(&cart).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Network(_)));
    assert_eq!(
        err.user_message(),
        "Something went wrong during checkout. Please try again."
    );
}
