//! Tests for the todo HTTP handlers.
//!
//! Handlers run against the real services over the in-memory repository so
//! the full boundary contract (status codes, wire field names, ordering) is
//! exercised without a database.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use super::*;
use crate::domain::{TodoCommandService, TodoQueryService};
use crate::outbound::persistence::InMemoryTodoRepository;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repo = Arc::new(InMemoryTodoRepository::default());
    let state = HttpState::new(
        Arc::new(TodoCommandService::new(Arc::clone(&repo))),
        Arc::new(TodoQueryService::new(repo)),
    );
    App::new()
        .app_data(web::Data::new(state))
        .service(list_todos)
        .service(get_todo)
        .service(create_todo)
        .service(update_todo)
        .service(delete_todo)
        .service(toggle_todo_completion)
}

async fn create(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    title: &str,
) -> Value {
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "title": title }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    actix_test::read_body_json(response).await
}

async fn get_status(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> StatusCode {
    actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request())
        .await
        .status()
}

#[actix_web::test]
async fn create_returns_created_view_with_location() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "title": "Buy milk" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("ascii header")
        .to_owned();

    let body: Value = actix_test::read_body_json(response).await;
    let id = body["id"].as_str().expect("id field");
    assert_eq!(location, format!("/todos/{id}"));
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["isCompleted"], false);
    let created_at = body["createdAt"].as_str().expect("createdAt field");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[actix_web::test]
async fn create_rejects_blank_title() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "title": "   " }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn list_returns_todos_newest_first() {
    let app = actix_test::init_service(test_app()).await;
    for title in ["first", "second", "third"] {
        create(&app, title).await;
    }

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/todos").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|todo| todo["title"].as_str().expect("title field"))
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[actix_web::test]
async fn list_is_empty_for_fresh_store() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/todos").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn get_rejects_malformed_identifier() {
    let app = actix_test::init_service(test_app()).await;
    assert_eq!(
        get_status(&app, "/todos/not-a-uuid").await,
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn get_reports_missing_todo_as_404() {
    let app = actix_test::init_service(test_app()).await;
    assert_eq!(
        get_status(&app, "/todos/00000000-0000-0000-0000-000000000001").await,
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn update_applies_only_present_fields() {
    let app = actix_test::init_service(test_app()).await;
    let created = create(&app, "Buy milk").await;
    let id = created["id"].as_str().expect("id field");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({ "isCompleted": true }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/todos/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(fetched).await;
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["isCompleted"], true);
}

#[actix_web::test]
async fn update_rejects_blank_title() {
    let app = actix_test::init_service(test_app()).await;
    let created = create(&app, "Buy milk").await;
    let id = created["id"].as_str().expect("id field");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({ "title": "  " }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_reports_missing_todo_as_404() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/todos/00000000-0000-0000-0000-000000000001")
            .set_json(json!({ "title": "Buy milk" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_reports_missing_todo_as_404() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/todos/00000000-0000-0000-0000-000000000001")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn toggle_reports_missing_todo_as_404() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/todos/00000000-0000-0000-0000-000000000001/toggle")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn todo_lifecycle_round_trips() {
    let app = actix_test::init_service(test_app()).await;

    let created = create(&app, "Buy milk").await;
    assert_eq!(created["isCompleted"], false);
    let id = created["id"].as_str().expect("id field").to_owned();
    let todo_uri = format!("/todos/{id}");
    let toggle_uri = format!("/todos/{id}/toggle");

    for expected in [true, false] {
        let toggled = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri(&toggle_uri)
                .to_request(),
        )
        .await;
        assert_eq!(toggled.status(), StatusCode::NO_CONTENT);

        let fetched = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(&todo_uri).to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(fetched).await;
        assert_eq!(body["isCompleted"], expected);
    }

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&todo_uri).to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert_eq!(get_status(&app, &todo_uri).await, StatusCode::NOT_FOUND);
}
