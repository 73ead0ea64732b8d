//! Tests for the favorite endpoints.
//!
//! Verifies creation, duplicate detection, removal and the not-found cases for both
//! planet and character favorites.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::controller::favorite::{
    add_favorite_person, add_favorite_planet, delete_favorite_person, delete_favorite_planet,
};

use super::*;

/// Expected: Ok with 201 Created response
#[tokio::test]
async fn add_favorite_planet_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let result = add_favorite_planet(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expected: Err with 400 Bad Request response on the second add
#[tokio::test]
async fn add_favorite_planet_twice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let first = add_favorite_planet(State(test.to_app_state::<AppState>()), IdPath(1)).await;
    assert!(first.is_ok());

    let second = add_favorite_planet(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn add_favorite_planet_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .build()
        .await?;

    let result = add_favorite_planet(State(test.to_app_state::<AppState>()), IdPath(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: Err with 404 Not Found response when no users exist
#[tokio::test]
async fn add_favorite_person_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_character("Luke Skywalker", None)
        .build()
        .await?;

    let result = add_favorite_person(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: Ok with 201 Created response
#[tokio::test]
async fn add_favorite_person_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("leia@example.com")
        .with_mock_character("Han Solo", None)
        .build()
        .await?;

    let result = add_favorite_person(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expected: Ok with 200 OK response
#[tokio::test]
async fn delete_favorite_planet_removed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_planet("Dagobah")
        .build()
        .await?;
    test.favorite().insert_planet_favorite(1, 1).await?;

    let result = delete_favorite_planet(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn delete_favorite_planet_not_a_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_planet("Dagobah")
        .build()
        .await?;

    let result = delete_favorite_planet(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: Ok on the first delete, Err with 404 Not Found response on the second
#[tokio::test]
async fn delete_favorite_person_twice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_character("Yoda", None)
        .build()
        .await?;
    test.favorite().insert_character_favorite(1, 1).await?;

    let first = delete_favorite_person(State(test.to_app_state::<AppState>()), IdPath(1)).await;
    assert!(first.is_ok());

    let second = delete_favorite_person(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Favorites of other users are not visible to the current user.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn delete_favorite_person_of_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user("luke@example.com")
        .with_mock_user("leia@example.com")
        .with_mock_character("Yoda", None)
        .build()
        .await?;
    test.favorite().insert_character_favorite(2, 1).await?;

    let result = delete_favorite_person(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
