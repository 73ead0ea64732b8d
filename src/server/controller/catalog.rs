use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, NotFoundDto},
        catalog::{CharacterDto, PlanetDto},
    },
    server::{
        controller::util::id_path::IdPath, error::Error, model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).list_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Character not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db)
        .get_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db).get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}
