use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, NotFoundDto},
        favorite::{FavoriteDto, FavoriteExistsDto, FavoriteTargetDto},
    },
    server::{
        controller::util::id_path::IdPath, error::Error, model::app::AppState,
        model::favorite::FavoriteTarget, service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Planet is already a favorite", body = FavoriteExistsDto),
        (status = 404, description = "No users exist or planet not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_favorite(FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteTargetDto),
        (status = 404, description = "No users exist or planet is not a favorite", body = FavoriteTargetDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteTargetDto {
            msg: "Favorite planet removed".to_string(),
            planet_id: Some(planet_id),
            character_id: None,
        }),
    ))
}

/// Add a character to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 400, description = "Character is already a favorite", body = FavoriteExistsDto),
        (status = 404, description = "No users exist or character not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_favorite(FavoriteTarget::Character(character_id))
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a character from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteTargetDto),
        (status = 404, description = "No users exist or character is not a favorite", body = FavoriteTargetDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(FavoriteTarget::Character(character_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteTargetDto {
            msg: "Favorite character removed".to_string(),
            planet_id: None,
            character_id: Some(character_id),
        }),
    ))
}
