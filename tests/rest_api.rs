//! Integration tests for the REST menu endpoints

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use restaurant_menu_rust::menu::AppState;
use restaurant_menu_rust::router::create_app_router;

fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::with_assets_dir(PathBuf::from("assets")));
    create_app_router(state)
}

/// Helper function to send a request and get the JSON response
async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

async fn post_dish(app: &axum::Router, course: &str, name: &str, price: &str) -> (StatusCode, Value) {
    send_rest_request(
        app,
        "POST",
        "/dishes",
        Some(json!({
            "courseType": course,
            "dishName": name,
            "dishDescription": "Chef's choice",
            "dishPrice": price
        })),
    )
    .await
}

#[tokio::test]
async fn test_post_dish_creates_entry() {
    let app = create_test_app();

    let (status, body) = post_dish(&app, "Main", "Soup", "9.5").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["dishPrice"], "9.50");

    let (status, body) = send_rest_request(&app, "GET", "/dishes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["course"], "All");
    assert_eq!(body["total"], 1);
    assert_eq!(body["dishes"][0]["dishName"], "Soup");
}

#[tokio::test]
async fn test_post_dish_validation_errors() {
    let app = create_test_app();

    let (status, body) = post_dish(&app, "Main", "Soup", "-3").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["title"], "Invalid Price");
    assert_eq!(body["error"]["field"], "dishPrice");

    let (status, body) = post_dish(&app, "Main", "   ", "").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "Please enter the dish name.");

    let (_, body) = send_rest_request(&app, "GET", "/dishes", None).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_post_dish_unknown_course_is_bad_request() {
    let app = create_test_app();

    let (status, body) = post_dish(&app, "Soup", "Soup", "1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["title"], "Bad Request");
}

#[tokio::test]
async fn test_list_dishes_with_course_filter() {
    let app = create_test_app();
    post_dish(&app, "Main", "Soup", "9.5").await;
    post_dish(&app, "Starter", "Bread", "4").await;

    let (status, body) = send_rest_request(&app, "GET", "/dishes?course=Starter", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["course"], "Starter");
    assert_eq!(body["dishes"].as_array().unwrap().len(), 1);
    assert_eq!(body["dishes"][0]["dishName"], "Bread");
    assert_eq!(body["total"], 2);

    let (_, body) = send_rest_request(&app, "GET", "/dishes?course=Dessert", None).await;
    assert!(body["dishes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_dish_is_idempotent() {
    let app = create_test_app();
    post_dish(&app, "Main", "A", "1").await;
    post_dish(&app, "Main", "B", "2").await;
    post_dish(&app, "Main", "C", "3").await;

    let (status, body) = send_rest_request(&app, "DELETE", "/dishes/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "removed");
    assert_eq!(body["total"], 2);

    let (status, body) = send_rest_request(&app, "DELETE", "/dishes/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "not_found");
    assert_eq!(body["total"], 2);

    let (_, body) = post_dish(&app, "Side", "D", "4").await;
    assert_eq!(body["id"], 4);
}

#[tokio::test]
async fn test_averages_endpoint() {
    let app = create_test_app();
    post_dish(&app, "Main", "Soup", "9.50").await;
    post_dish(&app, "Starter", "Bread", "4.00").await;

    let (status, body) = send_rest_request(&app, "GET", "/averages", None).await;

    assert_eq!(status, StatusCode::OK);
    let averages = body["averages"].as_object().unwrap();
    assert_eq!(averages.len(), 4);
    assert_eq!(averages["Main"], 9.5);
    assert_eq!(averages["Starter"], 4.0);
    assert_eq!(averages["Side"], 0.0);
    assert_eq!(averages["Dessert"], 0.0);
}
