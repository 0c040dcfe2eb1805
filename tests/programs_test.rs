mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use fitol::models::Program;
use fitol::repositories::ProgramRepository;

#[tokio::test]
async fn test_programs_list_empty() {
    let app = common::create_test_app(common::setup_test_store());

    let response = app.oneshot(common::get("/programs")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_seeded_programs_are_listed() {
    let store = common::setup_test_store();
    ProgramRepository::new(store.clone())
        .seed_defaults_if_needed()
        .unwrap();
    let app = common::create_test_app(store);

    let response = app.oneshot(common::get("/programs")).await.unwrap();

    let programs: Vec<Program> = serde_json::from_value(common::body_json(response).await).unwrap();
    let ids: Vec<&str> = programs.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["mon", "tue", "wed", "fri", "sat"]);
}

#[tokio::test]
async fn test_create_program() {
    let store = common::setup_test_store();
    let app = common::create_test_app(store.clone());
    let body = json!({
        "name": "Push Day",
        "exercises": [
            {"name": "Bench Press", "defaultSets": 4, "defaultReps": "8"},
            {"name": "", "defaultSets": 3, "defaultReps": 10}
        ]
    });

    let response = app
        .oneshot(common::json_request("POST", "/programs", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Program = serde_json::from_value(common::body_json(response).await).unwrap();
    assert_eq!(created.exercises.len(), 1);
    assert_eq!(created.exercises[0].default_reps, 8);

    let stored = ProgramRepository::new(store).find_by_id(&created.id);
    assert_eq!(stored, Some(created));
}

#[tokio::test]
async fn test_create_program_without_name_fails() {
    let app = common::create_test_app(common::setup_test_store());
    let body = json!({
        "name": "",
        "exercises": [{"name": "Bench Press", "defaultSets": 4, "defaultReps": 8}]
    });

    let response = app
        .oneshot(common::json_request("POST", "/programs", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_program_without_exercises_fails() {
    let app = common::create_test_app(common::setup_test_store());

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/programs",
            &json!({"name": "Empty"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_show_and_delete_program() {
    let store = common::setup_test_store();
    common::create_test_program(&store, "legs", "Legs");
    let app = common::create_test_app(store);

    let response = app.clone().oneshot(common::get("/programs/legs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["name"], "Legs");

    let response = app
        .clone()
        .oneshot(common::delete("/programs/legs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(common::get("/programs/legs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(common::delete("/programs/legs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
