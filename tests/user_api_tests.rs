//! Integration tests for the account profile endpoints.

use std::sync::Arc;

use serde_json::json;
use storefront_api::api::user::{self, ChangePasswordBody, UpdateProfileBody};
use storefront_api::api::ApiError;
use storefront_api::{ApiBaseUrl, Credential, HttpClient, StorefrontConfig, TokenStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> (HttpClient, Arc<TokenStore>) {
    let config = StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let store = Arc::new(TokenStore::new());
    store.save_credential(Credential::new("test-token"));
    let client = HttpClient::new(&config, Arc::clone(&store));
    (client, store)
}

fn user_json(name: &str) -> serde_json::Value {
    json!({
        "_id": "u-1",
        "email": "user@example.com",
        "name": name,
        "roles": ["User"],
        "createdAt": "2024-02-10T08:30:00Z",
        "updatedAt": "2024-03-01T12:00:00Z"
    })
}

#[tokio::test]
async fn test_me_fetches_profile_with_credential() {
    let server = MockServer::start().await;
    let (client, _store) = create_test_client(&server);

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "OK",
            "data": user_json("Test User")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = user::me(&client).await.unwrap();

    assert_eq!(result.data.id, "u-1");
    assert_eq!(result.data.name.as_deref(), Some("Test User"));
}

#[tokio::test]
async fn test_update_profile_persists_returned_profile() {
    let server = MockServer::start().await;
    let (client, store) = create_test_client(&server);

    Mock::given(method("PUT"))
        .and(path("/user"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Updated",
            "data": user_json("Renamed")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = UpdateProfileBody {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let result = user::update_profile(&client, &body).await.unwrap();

    assert_eq!(result.data.name.as_deref(), Some("Renamed"));
    // The stored profile tracks the server's record
    assert_eq!(store.profile().unwrap().name.as_deref(), Some("Renamed"));
}

#[tokio::test]
async fn test_change_password_sends_both_fields() {
    let server = MockServer::start().await;
    let (client, _store) = create_test_client(&server);

    Mock::given(method("PUT"))
        .and(path("/user"))
        .and(body_json(json!({
            "password": "old-pass",
            "new_password": "new-pass"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Updated",
            "data": user_json("Test User")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = ChangePasswordBody {
        password: "old-pass".to_string(),
        new_password: "new-pass".to_string(),
    };
    let result = user::change_password(&client, &body).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_change_password_with_wrong_password_maps_field_error() {
    let server = MockServer::start().await;
    let (client, _store) = create_test_client(&server);

    Mock::given(method("PUT"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Error",
            "data": {"password": "Password is incorrect"}
        })))
        .mount(&server)
        .await;

    let body = ChangePasswordBody {
        password: "wrong".to_string(),
        new_password: "new-pass".to_string(),
    };
    let result = user::change_password(&client, &body).await;

    match result {
        Err(ApiError::Validation { errors, .. }) => {
            assert_eq!(
                errors.get("password").map(String::as_str),
                Some("Password is incorrect")
            );
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}
