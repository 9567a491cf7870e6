//! Integration tests for the auth flow: credential persistence on login
//! and register, clearing on logout, and forced session resets on
//! unauthorized responses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use storefront_api::api::auth::{self, AuthBody};
use storefront_api::api::{purchase, ApiError};
use storefront_api::{ApiBaseUrl, Credential, HttpClient, StorefrontConfig, TokenStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client and its token store pointed at the mock server.
fn create_test_client(server: &MockServer) -> (HttpClient, Arc<TokenStore>) {
    let config = StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let store = Arc::new(TokenStore::new());
    let client = HttpClient::new(&config, Arc::clone(&store));
    (client, store)
}

fn user_json() -> serde_json::Value {
    json!({
        "_id": "u-1",
        "email": "user@example.com",
        "name": "Test User",
        "roles": ["User"],
        "createdAt": "2024-02-10T08:30:00Z",
        "updatedAt": "2024-02-10T08:30:00Z"
    })
}

fn auth_response(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "message": "Authentication successful",
        "data": {
            "access_token": token,
            "expires": "7d",
            "user": user_json()
        }
    }))
}

// ============================================================================
// Login / Register Side Effects
// ============================================================================

#[tokio::test]
async fn test_login_persists_credential_and_profile() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "hunter22"
        })))
        .respond_with(auth_response("tok-123"))
        .expect(1)
        .mount(&server)
        .await;

    let body = AuthBody {
        email: "user@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    let result = auth::login(&client, &body).await.unwrap();

    assert_eq!(result.data.access_token, "tok-123");
    assert_eq!(store.credential().unwrap().as_str(), "tok-123");
    assert!(store.is_authenticated());

    // The stored profile deep-equals the response's user object
    let stored = store.profile().unwrap();
    assert_eq!(serde_json::to_value(&stored).unwrap(), user_json());
}

#[tokio::test]
async fn test_register_persists_credential_and_profile() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(auth_response("tok-register"))
        .expect(1)
        .mount(&server)
        .await;

    let body = AuthBody {
        email: "user@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    auth::register(&client, &body).await.unwrap();

    assert_eq!(store.credential().unwrap().as_str(), "tok-register");
    assert!(store.profile().is_some());
}

#[tokio::test]
async fn test_login_response_returned_unchanged_to_caller() {
    let server = MockServer::start().await;
    let (client, _store) = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(auth_response("tok-123"))
        .mount(&server)
        .await;

    let body = AuthBody {
        email: "user@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    let result = auth::login(&client, &body).await.unwrap();

    assert_eq!(result.message, "Authentication successful");
    assert_eq!(result.data.user.email, "user@example.com");
    assert!(result.data.refresh_token.is_none());
}

// ============================================================================
// Credential Attachment
// ============================================================================

#[tokio::test]
async fn test_credential_attached_to_subsequent_requests() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);
    store.save_credential(Credential::new("tok-attach"));

    Mock::given(method("GET"))
        .and(path("/purchases"))
        .and(header("Authorization", "tok-attach"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "OK",
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = purchase::list(&client, purchase::PurchaseStatus::InCart).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_request_without_credential_is_unauthenticated() {
    let server = MockServer::start().await;
    let (client, _store) = create_test_client(&server);

    // The mock matches any GET /categories; we assert on the received
    // request's headers afterwards.
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "OK",
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    storefront_api::api::category::list(&client).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let has_authorization = requests[0]
        .headers
        .iter()
        .any(|(name, _)| name.as_str().eq_ignore_ascii_case("authorization"));
    assert!(!has_authorization);
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_clears_credential_and_profile() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(auth_response("tok-123"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Logout successful"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = AuthBody {
        email: "user@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    auth::login(&client, &body).await.unwrap();
    assert!(store.is_authenticated());

    let message = auth::logout(&client).await.unwrap();
    assert_eq!(message, "Logout successful");
    assert!(store.credential().is_none());
    assert!(store.profile().is_none());
}

// ============================================================================
// Unauthorized Responses
// ============================================================================

#[tokio::test]
async fn test_401_clears_stored_auth_state_regardless_of_endpoint() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);
    store.save_credential(Credential::new("stale-token"));

    Mock::given(method("GET"))
        .and(path("/purchases"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Token is expired"
        })))
        .mount(&server)
        .await;

    let result = purchase::list(&client, purchase::PurchaseStatus::InCart).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized { message }) if message == "Token is expired"
    ));
    assert!(store.credential().is_none());
    assert!(store.profile().is_none());
}

#[tokio::test]
async fn test_401_fires_clear_listeners_synchronously() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);
    store.save_credential(Credential::new("stale-token"));

    let resets = Arc::new(AtomicUsize::new(0));
    let observed = Arc::clone(&resets);
    store.on_clear(move || {
        observed.fetch_add(1, Ordering::SeqCst);
    });

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Token is expired"
        })))
        .mount(&server)
        .await;

    let _ = storefront_api::api::category::list(&client).await;

    assert_eq!(resets.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Validation Failures
// ============================================================================

#[tokio::test]
async fn test_422_maps_field_errors_and_leaves_store_untouched() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Error",
            "data": {
                "email": "Email already exists"
            }
        })))
        .mount(&server)
        .await;

    let body = AuthBody {
        email: "taken@example.com".to_string(),
        password: "hunter22".to_string(),
    };
    let result = auth::register(&client, &body).await;

    match result {
        Err(ApiError::Validation { errors, .. }) => {
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Email already exists")
            );
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }

    assert!(store.credential().is_none());
    assert!(store.profile().is_none());
}
