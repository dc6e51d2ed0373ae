
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fixtures::*;
use presentable::prelude::*;
use presentable::{PresentError, Presented};
use serde_json::json;

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_presented_response() {
    let role = Role::new("Admin", "Full access");
    let response = Presented(CustomRolePresenter::make(&role)).into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    assert_eq!(
        json_body(response).await,
        json!({ "fullTitle": "Admin - Full access", "name": "Admin", "custom": "Custom Value" })
    );
}

#[tokio::test]
async fn test_collection_response() {
    let users = users(2);
    let response = UserSummaryPresenter::collection(&users).into_response();
    assert_eq!(
        json_body(response).await,
        json!([
            { "fullname": "First1 Last1", "email": "user1@example.com" },
            { "fullname": "First2 Last2", "email": "user2@example.com" }
        ])
    );
}

#[tokio::test]
async fn test_presentation_response_follows_receiver() {
    let paginator = FixturePaginator::new(roles(1));
    let body = json_body(paginator.present_collection::<RolePresenter>().into_response()).await;
    assert_eq!(body["meta"]["per_page"], json!(15));
    assert_eq!(body["data"][0]["name"], json!("Role1"));

    let roles = roles(1);
    let body = json_body(roles.present_collection::<RolePresenter>().into_response()).await;
    assert!(body.is_array());
}

#[tokio::test]
async fn test_pagination_envelope_response() {
    let page = Page::new(users(1), 1, 10, 1).with_path("/users");
    let body = json_body(UserPresenter::pagination(&page).into_response()).await;
    assert_eq!(body["links"]["first"], json!("/users?page=1"));
    assert_eq!(body["links"]["next"], Value::Null);
}

#[tokio::test]
async fn test_invalid_presenter_response() {
    let registry: PresenterRegistry<User> = PresenterRegistry::new();
    let user = User::new("John", "Doe", "john@example.com");
    let error = registry.make("summary", &user).unwrap_err();

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({
            "error": "Invalid presenter: 'summary' is not a registered presenter",
            "code": "invalid_presenter"
        })
    );
}

#[tokio::test]
async fn test_undefined_key_response() {
    let error = PresentError::UndefinedKey("email".into());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["code"], json!("undefined_key"));
}
