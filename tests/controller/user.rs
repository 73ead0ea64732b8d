//! Tests for the user endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::controller::user::{get_user_favorites, hello, list_users};

use super::*;

#[tokio::test]
async fn hello_responds_ok() {
    let resp = hello().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
}

/// Expected: Ok with 200 OK response
#[tokio::test]
async fn list_users_with_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_user("leia@example.com")
        .build()
        .await?;

    let result = list_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_user_favorites_with_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    test.favorite().insert_planet_favorite(1, 1).await?;

    let result = get_user_favorites(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Err with 404 Not Found response when no users exist
#[tokio::test]
async fn get_user_favorites_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_user_favorites(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
