mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use rent_estimator::api::handlers::{create_favorite_handler, get_favorites_handler};
use serde_json::json;

fn favorites_app(state: rent_estimator::AppState) -> TestServer {
    let app = Router::new()
        .route("/favorites", post(create_favorite_handler))
        .route("/favorites/{account_id}", get(get_favorites_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_favorite_success() {
    let (state, _accounts, favorites) = common::default_test_state();
    let server = favorites_app(state);

    let response = server
        .post("/favorites")
        .json(&json!({
            "accountId": "account-1",
            "propertyId": "M7952539079"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["accountId"], "account-1");
    assert_eq!(body["propertyId"], "M7952539079");
    assert_eq!(body["status"], "Success");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));

    assert_eq!(favorites.insert_count(), 1);
}

#[tokio::test]
async fn test_create_favorite_missing_account_id_is_rejected_before_dispatch() {
    let (state, _accounts, favorites) = common::default_test_state();
    let server = favorites_app(state);

    let response = server
        .post("/favorites")
        .json(&json!({ "propertyId": "M7952539079" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Failure");
    assert_eq!(body["error"]["code"], "validation_error");

    assert_eq!(favorites.insert_count(), 0);
}

#[tokio::test]
async fn test_create_favorite_empty_fields_are_rejected() {
    let (state, _accounts, favorites) = common::default_test_state();
    let server = favorites_app(state);

    let response = server
        .post("/favorites")
        .json(&json!({ "accountId": "", "propertyId": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(favorites.insert_count(), 0);
}

#[tokio::test]
async fn test_get_favorites_returns_only_rows_for_the_account() {
    let (state, _accounts, favorites) = common::default_test_state();
    favorites.seed("id-1", "account-1", "M1");
    favorites.seed("id-2", "account-1", "M2");
    favorites.seed("id-3", "account-2", "M3");

    let server = favorites_app(state);

    let response = server.get("/favorites/account-1").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Success");

    let rows = body["favorites"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["accountId"] == "account-1"));

    let mut property_ids: Vec<&str> = rows
        .iter()
        .map(|row| row["propertyId"].as_str().unwrap())
        .collect();
    property_ids.sort_unstable();
    assert_eq!(property_ids, vec!["M1", "M2"]);
}

#[tokio::test]
async fn test_get_favorites_empty_account_yields_success_with_empty_list() {
    let (state, _accounts, _favorites) = common::default_test_state();
    let server = favorites_app(state);

    let response = server.get("/favorites/account-without-favorites").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Success");
    assert_eq!(body["favorites"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_favorites_is_a_pure_read() {
    let (state, _accounts, favorites) = common::default_test_state();
    favorites.seed("id-1", "account-1", "M1");

    let server = favorites_app(state);

    let first = server.get("/favorites/account-1").await;
    let second = server.get("/favorites/account-1").await;

    assert_eq!(
        first.json::<serde_json::Value>(),
        second.json::<serde_json::Value>()
    );
}
