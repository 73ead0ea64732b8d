//! Tests for the character and planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::server::controller::catalog::{get_person, get_planet, list_people, list_planets};

use super::*;

/// Expected: Ok with 200 OK response for an empty catalog
#[tokio::test]
async fn list_planets_with_no_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = list_planets(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Ok with 200 OK response
#[tokio::test]
async fn list_people_with_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", Some(1))
        .with_mock_character("Leia Organa", None)
        .build()
        .await?;

    let result = list_people(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_planet_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let planet = test.catalog().insert_mock_planet("Hoth").await?;

    let result = get_planet(State(test.to_app_state::<AppState>()), IdPath(planet.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn get_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_planet(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: Ok with 200 OK response
#[tokio::test]
async fn get_person_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_character("Han Solo", None)
        .build()
        .await?;

    let result = get_person(State(test.to_app_state::<AppState>()), IdPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn get_person_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_person(State(test.to_app_state::<AppState>()), IdPath(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: Err with 500 Internal Server Error response when tables are missing
#[tokio::test]
async fn list_planets_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_planets(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
