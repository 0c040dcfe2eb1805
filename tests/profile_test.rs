mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use fitol::repositories::ProfileRepository;

#[tokio::test]
async fn test_profile_defaults_from_identity() {
    let app = common::create_test_app(common::setup_test_store());

    let response = app
        .oneshot(common::get("/profile?name=Jane%20Doe&image=https%3A%2F%2Fexample.com%2Fa.png"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["stored"], false);
    assert_eq!(body["profile"]["firstName"], "Jane");
    assert_eq!(body["profile"]["lastName"], "Doe");
    assert_eq!(body["profile"]["age"], 25);
    assert_eq!(body["profile"]["image"], "https://example.com/a.png");
}

#[tokio::test]
async fn test_profile_default_without_identity() {
    let app = common::create_test_app(common::setup_test_store());

    let response = app.oneshot(common::get("/profile")).await.unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["profile"]["firstName"], "User");
    assert_eq!(body["profile"]["gender"], "Male");
}

#[tokio::test]
async fn test_update_profile_overwrites() {
    let store = common::setup_test_store();
    let app = common::create_test_app(store.clone());
    let body = json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "gender": "Female",
        "weight": "61.5",
        "age": "29",
        "height": 170
    });

    let response = app
        .clone()
        .oneshot(common::json_request("PUT", "/profile", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = ProfileRepository::new(store).get().unwrap();
    assert_eq!(stored.weight, 61.5);
    assert_eq!(stored.age, 29);
    assert_eq!(stored.height, Some(170.0));

    let response = app.oneshot(common::get("/profile?name=Someone")).await.unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["stored"], true);
    assert_eq!(body["profile"]["firstName"], "Jane");
}

#[tokio::test]
async fn test_health_check() {
    let app = common::create_test_app(common::setup_test_store());

    let response = app.oneshot(common::get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["status"], "ok");
}
